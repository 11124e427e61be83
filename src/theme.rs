use anyhow::{anyhow, Result};
use dioxus::document;
use dioxus::logger::tracing::debug;

pub const DARK_CLASS: &str = "dark";

const PREFERS_DARK_JS: &str =
    "return !!(window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches);";

/// Anything holding a set of CSS classes, usually the document root.
pub trait ClassList {
    fn add(&mut self, class: &str);
    fn remove(&mut self, class: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
    // set once the user has picked a theme by hand
    chosen: bool,
}

impl ThemeState {
    pub fn new(dark: bool) -> Self {
        Self { dark, chosen: false }
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        self.chosen = true;
    }

    /// Adopt the platform preference unless the user already toggled.
    /// Returns whether the preference was applied.
    pub fn seed_preference(&mut self, dark: bool) -> bool {
        if self.chosen {
            return false;
        }
        self.dark = dark;
        true
    }

    /// Class the root element should carry, if any.
    pub fn root_class(&self) -> Option<&'static str> {
        self.dark.then_some(DARK_CLASS)
    }

    /// Sync `target` so it has the dark class iff the theme is dark.
    pub fn apply<C: ClassList>(&self, target: &mut C) {
        match self.root_class() {
            Some(class) => target.add(class),
            None => target.remove(DARK_CLASS),
        }
    }
}

/// `document.documentElement`, reached through the renderer's JS bridge.
pub struct DocumentRoot;

impl ClassList for DocumentRoot {
    fn add(&mut self, class: &str) {
        debug!("[theme] root class += {class}");
        let _ = document::eval(&format!(
            "document.documentElement.classList.add({class:?});"
        ));
    }

    fn remove(&mut self, class: &str) {
        debug!("[theme] root class -= {class}");
        let _ = document::eval(&format!(
            "document.documentElement.classList.remove({class:?});"
        ));
    }
}

/// Ask the platform whether the user prefers a dark color scheme.
pub async fn prefers_dark() -> Result<bool> {
    document::eval(PREFERS_DARK_JS)
        .join::<bool>()
        .await
        .map_err(|e| anyhow!("color scheme query failed: {e:?}"))
}
