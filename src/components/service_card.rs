use dioxus::prelude::*;

use crate::components::{Icon, IconKind, StatusIcon, TrendChart};
use crate::shared::Service;
use crate::utils::format::{format_response_time, format_time, format_uptime};

#[derive(Props, Clone, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[allow(non_snake_case)]
#[component]
pub fn ServiceCard(props: ServiceCardProps) -> Element {
    let service = &props.service;
    let status = service.status;
    let uptime = format_uptime(service.uptime);
    let response = format_response_time(service.response_time_ms);
    let updated = format_time(&service.last_updated);

    rsx! {
        div { class: "service-card group",
            // Name + badge
            div { class: "card-header",
                div { class: "card-title",
                    div { class: "card-mark", div { class: "card-mark-dot" } }
                    h3 { "{service.name}" }
                }
                div { class: "status-badge {status.badge_class()}",
                    StatusIcon { status: status, fallback: IconKind::CheckCircle, size: "icon-md".to_string() }
                    span { class: "ml-1", "{status.label()}" }
                }
            }

            div { class: "card-chart",
                div { class: "card-row",
                    span { class: "muted text-sm", "24h Uptime" }
                    span { class: "text-sm font-medium", "{uptime}" }
                }
                TrendChart { data: service.uptime_history.clone() }
            }

            div { class: "stat-grid",
                div { class: "stat",
                    Icon { kind: IconKind::TrendingUp, class: "icon-sm muted".to_string() }
                    div {
                        div { class: "stat-label", "Uptime" }
                        div { class: "stat-value", "{uptime}" }
                    }
                }
                div { class: "stat",
                    Icon { kind: IconKind::Zap, class: "icon-sm muted".to_string() }
                    div {
                        div { class: "stat-label", "Response" }
                        div { class: "stat-value", "{response}" }
                    }
                }
            }

            div { class: "card-footer",
                Icon { kind: IconKind::Clock, class: "icon-xs".to_string() }
                time { datetime: "{service.last_updated.to_rfc3339()}", "Updated {updated}" }
            }

            div { class: "card-glow" }
        }
    }
}
