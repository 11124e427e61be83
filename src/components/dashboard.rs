use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::components::{Icon, IconKind, ServiceCard, StatusIcon};
use crate::config::DashboardConfig;
use crate::shared::aggregate_status;
use crate::theme::{prefers_dark, DocumentRoot, ThemeState};
use crate::utils::format::format_clock;

/// Stagger between card entrance animations, in seconds.
const CARD_STAGGER_SECS: f32 = 0.1;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    pub config: DashboardConfig,
}

#[allow(non_snake_case)]
#[component]
pub fn Dashboard(props: DashboardProps) -> Element {
    let config = &props.config;
    let services = use_signal(|| config.services.clone());
    let mut theme = use_signal(|| ThemeState::new(false));

    // Seed the theme from the platform preference once on mount
    use_effect(move || {
        spawn(async move {
            match prefers_dark().await {
                Ok(dark) => {
                    if theme.write().seed_preference(dark) {
                        info!(
                            "[dashboard] preferred color scheme: {}",
                            if dark { "dark" } else { "light" }
                        );
                    } else {
                        debug!("[dashboard] theme already chosen, ignoring preference");
                    }
                }
                Err(e) => warn!("[dashboard] keeping light theme: {e}"),
            }
        });
    });

    // Mirror the theme onto the document root
    use_effect(move || {
        theme.read().apply(&mut DocumentRoot);
    });

    let services_v = services.read();
    let overall = aggregate_status(&services_v);
    let dark = theme.read().dark;
    let toggle_title = if dark { "Switch to light mode" } else { "Switch to dark mode" };
    let rendered_at = format_clock(&chrono::Utc::now());

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-inner",
                header { class: "dashboard-header animate-fade-in",
                    div { class: "header-row",
                        div { class: "header-text",
                            div { class: "header-title",
                                StatusIcon { status: overall, fallback: IconKind::Activity, size: "icon-md".to_string() }
                                h1 { "{config.title}" }
                            }
                            p { class: "subtitle", "{config.subtitle}" }
                        }
                        button {
                            class: "theme-toggle glow-primary",
                            title: "{toggle_title}",
                            onclick: move |_| {
                                theme.write().toggle();
                                info!("[dashboard] theme toggled, dark={}", theme.read().dark);
                            },
                            if dark {
                                Icon { kind: IconKind::Sun, class: "icon-sm".to_string() }
                            } else {
                                Icon { kind: IconKind::Moon, class: "icon-sm".to_string() }
                            }
                        }
                    }

                    div { class: "status-banner status-badge {overall.badge_class()}",
                        StatusIcon { status: overall, fallback: IconKind::Activity, size: "icon-md".to_string() }
                        span { "{overall.banner_text()}" }
                    }
                }

                div { class: "service-grid",
                    for (index, service) in services_v.iter().enumerate() {
                        div {
                            key: "{service.id}",
                            class: "animate-slide-up",
                            style: "animation-delay: {stagger_delay(index)}",
                            ServiceCard { service: service.clone() }
                        }
                    }
                }

                footer { class: "dashboard-footer",
                    div { class: "footer-row",
                        Icon { kind: IconKind::Clock, class: "icon-sm".to_string() }
                        span { "Last updated: {rendered_at}" }
                    }
                    p { class: "text-sm", "{config.refresh_note}" }
                }
            }
        }
    }
}

fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f32 * CARD_STAGGER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Service, ServiceStatus};
    use chrono::{TimeZone, Utc};

    fn service(id: &str, name: &str, status: ServiceStatus) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            status,
            last_updated: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            uptime: 99.5,
            response_time_ms: 120,
            uptime_history: vec![99.5; 24],
        }
    }

    fn render(config: DashboardConfig) -> String {
        let mut dom = VirtualDom::new_with_props(Dashboard, DashboardProps { config });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_outage_banner_and_card_order() {
        let html = render(DashboardConfig::new(vec![
            service("alpha", "Alpha Mail", ServiceStatus::Operational),
            service("bravo", "Bravo Pay", ServiceStatus::Degraded),
            service("charlie", "Charlie DNS", ServiceStatus::Outage),
        ]));

        assert!(html.contains("System Outage Detected"));
        assert!(html.contains("status-banner status-badge status-down"));
        assert_eq!(html.matches("service-card group").count(), 3);

        let alpha = html.find("Alpha Mail").unwrap();
        let bravo = html.find("Bravo Pay").unwrap();
        let charlie = html.find("Charlie DNS").unwrap();
        assert!(alpha < bravo && bravo < charlie);
    }

    #[test]
    fn test_empty_dashboard_is_operational() {
        let html = render(DashboardConfig::new(vec![]));
        assert!(html.contains("All Systems Operational"));
        assert!(html.contains("status-banner status-badge status-up"));
        assert!(!html.contains("service-card"));
        assert!(html.contains("Monitoring status updates every 30 seconds"));
    }

    #[test]
    fn test_starts_light_with_moon_toggle() {
        let html = render(DashboardConfig::new(vec![]));
        assert!(html.contains(IconKind::Moon.paths()[0]));
        assert!(!html.contains(IconKind::Sun.paths()[1]));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(1), "0.1s");
        assert_eq!(stagger_delay(3), "0.3s");
    }
}
