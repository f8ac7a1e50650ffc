// Config layer - environment-driven settings and logging bootstrap

pub mod logging;
pub mod settings;

pub use logging::{init_logging, LoggingError};
pub use settings::{ApiSettings, RoutePaths};
