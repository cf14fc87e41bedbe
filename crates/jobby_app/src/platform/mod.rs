mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
pub use config::{load_config, DEFAULT_CONFIG_PATH};
pub use logging::{initialize as initialize_logging, LogDestination, DEFAULT_LOG_FILE};
