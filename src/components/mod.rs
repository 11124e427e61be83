pub mod dashboard;
pub mod icons;
pub mod service_card;
pub mod trend_chart;

pub use dashboard::Dashboard;
pub use icons::{Icon, IconKind, StatusIcon};
pub use service_card::ServiceCard;
pub use trend_chart::TrendChart;
