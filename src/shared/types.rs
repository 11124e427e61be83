use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status::ServiceStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub status: ServiceStatus,
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
    pub uptime: f64, // percentage
    #[serde(rename = "responseTime")]
    pub response_time_ms: u32,
    #[serde(rename = "uptimeHistory")]
    pub uptime_history: Vec<f64>, // oldest first, one sample per hour
}
