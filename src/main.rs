use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

mod app;
mod components;
mod config;
mod shared;
mod theme;
mod utils;

use config::DashboardConfig;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(feature = "desktop")]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

#[cfg(not(feature = "desktop"))]
fn init_tracing() {
    let _ = dioxus::logger::init(dioxus::logger::tracing::Level::INFO);
}

fn main() {
    init_tracing();

    let config = DashboardConfig::mock(chrono::Utc::now());
    if let Err(e) = config.validate() {
        warn!("[config] sample data looks off: {e}");
    }
    info!("[config] loaded {} service(s)", config.services.len());

    LaunchBuilder::new().with_context(config).launch(app::App);
}
