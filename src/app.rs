use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::MAIN_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    // Provided once by the launcher in main
    let config = use_context::<DashboardConfig>();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Title { "{config.title}" }
        document::Meta { name: "color-scheme", content: "light dark" }
        Dashboard { config: config }
    }
}
