pub mod status;
pub mod types;

pub use status::{aggregate_status, ServiceStatus};
pub use types::Service;
