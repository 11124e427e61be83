use dioxus::prelude::*;

use crate::shared::ServiceStatus;

/// Outline icons drawn on a 24x24 grid with a 2px round stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    CheckCircle,
    XCircle,
    AlertTriangle,
    Wrench,
    Activity,
    Moon,
    Sun,
    Clock,
    TrendingUp,
    Zap,
}

// Full circle of radius r centered on (12, 12) as two half arcs
macro_rules! circle {
    (10) => {
        "M2 12a10 10 0 1 0 20 0a10 10 0 1 0 -20 0"
    };
    (4) => {
        "M8 12a4 4 0 1 0 8 0a4 4 0 1 0 -8 0"
    };
}

impl IconKind {
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4 12 14.01l-3-3"],
            IconKind::XCircle => &[circle!(10), "m15 9-6 6", "m9 9 6 6"],
            IconKind::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
                "M12 9v4",
                "M12 17h.01",
            ],
            IconKind::Wrench => &[concat!(
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77",
                "a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91",
                "a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            )],
            IconKind::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            IconKind::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            IconKind::Sun => &[
                circle!(4),
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconKind::Clock => &[circle!(10), "M12 6v6l4 2"],
            IconKind::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            IconKind::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }

    /// Icon for a known status; `None` for Unknown so callers pick their own.
    pub fn for_status(status: ServiceStatus) -> Option<Self> {
        match status {
            ServiceStatus::Operational => Some(IconKind::CheckCircle),
            ServiceStatus::Outage => Some(IconKind::XCircle),
            ServiceStatus::Degraded => Some(IconKind::AlertTriangle),
            ServiceStatus::Maintenance => Some(IconKind::Wrench),
            ServiceStatus::Unknown => None,
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn Icon(kind: IconKind, class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {kind.paths().iter().map(|d| rsx!{ path { key: "{d}", d: "{d}" } })}
        }
    }
}

/// Status icon tinted with the status color, or `fallback` when unmapped.
#[allow(non_snake_case)]
#[component]
pub fn StatusIcon(status: ServiceStatus, fallback: IconKind, size: String) -> Element {
    let kind = IconKind::for_status(status).unwrap_or(fallback);
    rsx! {
        Icon { kind: kind, class: format!("{size} {}", status.text_class()) }
    }
}
