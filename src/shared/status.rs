use serde::{Deserialize, Serialize};

use crate::shared::types::Service;

/// Health of a single monitored service.
///
/// The four named variants are the whole vocabulary a status feed is
/// expected to speak. `Unknown` catches anything else so that a new token
/// upstream renders as a neutral badge instead of breaking the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[serde(alias = "up")]
    Operational,
    #[serde(alias = "down")]
    Outage,
    #[serde(alias = "partial")]
    Degraded,
    Maintenance,
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    /// Badge text shown on a service card.
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "Operational",
            ServiceStatus::Outage => "Outage",
            ServiceStatus::Degraded => "Degraded",
            ServiceStatus::Maintenance => "Maintenance",
            ServiceStatus::Unknown => "Unknown",
        }
    }

    /// Color class for the badge. Unknown borrows the operational look.
    pub fn badge_class(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "status-up",
            ServiceStatus::Outage => "status-down",
            ServiceStatus::Degraded => "status-partial",
            ServiceStatus::Maintenance => "status-maintenance",
            ServiceStatus::Unknown => "status-up",
        }
    }

    /// Foreground color class for the status icon; Unknown stays uncolored.
    pub fn text_class(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "text-status-up",
            ServiceStatus::Outage => "text-status-down",
            ServiceStatus::Degraded => "text-status-partial",
            ServiceStatus::Maintenance => "text-status-maintenance",
            ServiceStatus::Unknown => "",
        }
    }

    /// Headline for the aggregate banner at the top of the dashboard.
    pub fn banner_text(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "All Systems Operational",
            ServiceStatus::Outage => "System Outage Detected",
            ServiceStatus::Degraded => "Partial System Outage",
            ServiceStatus::Maintenance | ServiceStatus::Unknown => "Maintenance in Progress",
        }
    }
}

impl From<&str> for ServiceStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "operational" | "up" => ServiceStatus::Operational,
            "outage" | "down" => ServiceStatus::Outage,
            "degraded" | "partial" => ServiceStatus::Degraded,
            "maintenance" => ServiceStatus::Maintenance,
            _ => ServiceStatus::Unknown,
        }
    }
}

/// Worst-case status across all services.
///
/// Any outage wins, then any degradation, otherwise operational. Maintenance
/// never surfaces here, and an empty list counts as operational.
pub fn aggregate_status(services: &[Service]) -> ServiceStatus {
    if services.iter().any(|s| s.status == ServiceStatus::Outage) {
        return ServiceStatus::Outage;
    }
    if services.iter().any(|s| s.status == ServiceStatus::Degraded) {
        return ServiceStatus::Degraded;
    }
    ServiceStatus::Operational
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service(id: &str, status: ServiceStatus) -> Service {
        Service {
            id: id.to_string(),
            name: id.to_uppercase(),
            status,
            last_updated: Utc::now(),
            uptime: 99.9,
            response_time_ms: 100,
            uptime_history: vec![99.9; 24],
        }
    }

    #[test]
    fn test_labels_and_classes() {
        let expected = [
            (ServiceStatus::Operational, "Operational", "status-up"),
            (ServiceStatus::Outage, "Outage", "status-down"),
            (ServiceStatus::Degraded, "Degraded", "status-partial"),
            (ServiceStatus::Maintenance, "Maintenance", "status-maintenance"),
        ];
        for (status, label, class) in expected {
            assert_eq!(status.label(), label);
            assert_eq!(status.badge_class(), class);
        }
    }

    #[test]
    fn test_banner_texts() {
        let expected = [
            (ServiceStatus::Operational, "All Systems Operational"),
            (ServiceStatus::Outage, "System Outage Detected"),
            (ServiceStatus::Degraded, "Partial System Outage"),
            (ServiceStatus::Maintenance, "Maintenance in Progress"),
            (ServiceStatus::Unknown, "Maintenance in Progress"),
        ];
        for (status, text) in expected {
            assert_eq!(status.banner_text(), text);
        }
    }

    #[test]
    fn test_unknown_token_falls_back() {
        let status = ServiceStatus::from("on-fire");
        assert_eq!(status, ServiceStatus::Unknown);
        assert_eq!(status.label(), "Unknown");
        assert_eq!(status.badge_class(), ServiceStatus::Operational.badge_class());
    }

    #[test]
    fn test_legacy_tokens() {
        assert_eq!(ServiceStatus::from("up"), ServiceStatus::Operational);
        assert_eq!(ServiceStatus::from("down"), ServiceStatus::Outage);
        assert_eq!(ServiceStatus::from("partial"), ServiceStatus::Degraded);
        assert_eq!(ServiceStatus::from("maintenance"), ServiceStatus::Maintenance);
    }

    #[test]
    fn test_serde_tokens() {
        let all = [
            ServiceStatus::Operational,
            ServiceStatus::Outage,
            ServiceStatus::Degraded,
            ServiceStatus::Maintenance,
        ];
        let json = serde_json::to_string(&all).unwrap();
        assert_eq!(json, r#"["operational","outage","degraded","maintenance"]"#);

        let parsed: Vec<ServiceStatus> =
            serde_json::from_str(r#"["up","down","partial","maintenance","sideways"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                ServiceStatus::Operational,
                ServiceStatus::Outage,
                ServiceStatus::Degraded,
                ServiceStatus::Maintenance,
                ServiceStatus::Unknown,
            ]
        );
    }

    #[test]
    fn test_aggregate_empty_is_operational() {
        assert_eq!(aggregate_status(&[]), ServiceStatus::Operational);
    }

    #[test]
    fn test_aggregate_outage_wins() {
        let services = vec![
            service("a", ServiceStatus::Degraded),
            service("b", ServiceStatus::Maintenance),
            service("c", ServiceStatus::Outage),
            service("d", ServiceStatus::Operational),
        ];
        assert_eq!(aggregate_status(&services), ServiceStatus::Outage);
    }

    #[test]
    fn test_aggregate_degraded_without_outage() {
        let services = vec![
            service("a", ServiceStatus::Operational),
            service("b", ServiceStatus::Degraded),
            service("c", ServiceStatus::Maintenance),
        ];
        assert_eq!(aggregate_status(&services), ServiceStatus::Degraded);
    }

    #[test]
    fn test_aggregate_ignores_maintenance() {
        let services = vec![
            service("a", ServiceStatus::Maintenance),
            service("b", ServiceStatus::Maintenance),
        ];
        assert_eq!(aggregate_status(&services), ServiceStatus::Operational);
    }
}
