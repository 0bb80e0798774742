//! Logging configuration and initialization
//!
//! Logs are written to stderr so reports on stdout stay machine-readable.

use crate::app::config::AppConfig;
use tracing::{debug, trace, warn};

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_line_number(config.verbose >= 3)
        .init();

    for message in &config.warnings {
        warn!("{}", message);
    }

    debug!("text-analyzer started with verbosity level: {}", config.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
