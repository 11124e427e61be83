use std::collections::HashSet;

use anyhow::{bail, ensure, Result};
use chrono::{DateTime, Duration, Utc};

use crate::shared::{Service, ServiceStatus};

/// Static literal for one sample service. Timestamps are kept as an age so
/// the sample data always looks fresh relative to startup.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub status: ServiceStatus,
    pub age_minutes: i64,
    pub uptime: f64,
    pub response_time_ms: u32,
    pub uptime_history: &'static [f64],
}

impl ServiceSeed {
    pub fn resolve(&self, now: DateTime<Utc>) -> Service {
        Service {
            id: self.id.to_string(),
            name: self.name.to_string(),
            status: self.status,
            last_updated: now - Duration::minutes(self.age_minutes),
            uptime: self.uptime,
            response_time_ms: self.response_time_ms,
            uptime_history: self.uptime_history.to_vec(),
        }
    }
}

pub const MOCK_SERVICES: [ServiceSeed; 4] = [
    ServiceSeed {
        id: "github",
        name: "GitHub",
        status: ServiceStatus::Operational,
        age_minutes: 5,
        uptime: 99.9,
        response_time_ms: 145,
        uptime_history: &[
            99.8, 99.9, 100.0, 99.7, 99.9, 100.0, 99.8, 99.9, 100.0, 99.9, 99.8, 100.0, 99.9,
            99.7, 100.0, 99.8, 99.9, 100.0, 99.9, 99.8, 100.0, 99.9, 99.8, 99.9,
        ],
    },
    ServiceSeed {
        id: "discord",
        name: "Discord",
        status: ServiceStatus::Operational,
        age_minutes: 2,
        uptime: 99.7,
        response_time_ms: 89,
        uptime_history: &[
            99.5, 99.8, 99.9, 99.6, 99.8, 99.9, 99.7, 99.8, 99.9, 99.8, 99.6, 99.9, 99.8, 99.5,
            99.9, 99.7, 99.8, 99.9, 99.8, 99.7, 99.9, 99.8, 99.6, 99.8,
        ],
    },
    ServiceSeed {
        id: "cloudflare",
        name: "Cloudflare",
        status: ServiceStatus::Degraded,
        age_minutes: 15,
        uptime: 98.2,
        response_time_ms: 234,
        uptime_history: &[
            98.1, 98.5, 98.8, 97.9, 98.3, 98.7, 98.0, 98.4, 98.9, 98.2, 97.8, 98.6, 98.1, 97.7,
            98.5, 98.0, 98.3, 98.8, 98.1, 97.9, 98.4, 98.0, 97.8, 98.2,
        ],
    },
    ServiceSeed {
        id: "google",
        name: "Google Cloud",
        status: ServiceStatus::Operational,
        age_minutes: 1,
        uptime: 99.95,
        response_time_ms: 67,
        uptime_history: &[
            99.9, 100.0, 99.8, 99.9, 100.0, 99.9, 99.8, 100.0, 99.9, 100.0, 99.8, 99.9, 100.0,
            99.9, 99.8, 100.0, 99.9, 99.8, 100.0, 99.9, 99.8, 100.0, 99.9, 99.95,
        ],
    },
];

/// Everything the dashboard shows, built once at startup and handed to the
/// root component by value.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub subtitle: String,
    /// Footer copy only; nothing refreshes.
    pub refresh_note: String,
    pub services: Vec<Service>,
}

impl DashboardConfig {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            title: "Service Status Dashboard".to_string(),
            subtitle: "Realtime monitoring for popular platforms".to_string(),
            refresh_note: "Monitoring status updates every 30 seconds".to_string(),
            services,
        }
    }

    pub fn mock(now: DateTime<Utc>) -> Self {
        Self::new(MOCK_SERVICES.iter().map(|seed| seed.resolve(now)).collect())
    }

    /// Sanity checks on the service list. Nothing depends on these holding;
    /// callers log the error and render anyway.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for s in &self.services {
            if !seen.insert(s.id.as_str()) {
                bail!("duplicate service id '{}'", s.id);
            }
            ensure!(
                is_percentage(s.uptime),
                "service '{}' uptime {} is outside 0..=100",
                s.id,
                s.uptime
            );
            if let Some(bad) = s.uptime_history.iter().find(|v| !is_percentage(**v)) {
                bail!("service '{}' history sample {} is outside 0..=100", s.id, bad);
            }
        }
        Ok(())
    }
}

fn is_percentage(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}
