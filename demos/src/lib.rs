use log::{ParseLevelError, SetLoggerError};
use thiserror::Error;

pub mod config;
pub mod scenario;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unable to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(#[from] ParseLevelError),
    #[error("Unable to initialize logger: {0}")]
    Logger(#[from] SetLoggerError),
}
