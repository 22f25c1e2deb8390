//! Error handling for the farm analytics engine

use thiserror::Error;

/// Analytics error types
#[derive(Error, Debug)]
pub enum AnalyticsError {
    // Query errors
    #[error("Forecast series is empty")]
    EmptySeries,

    #[error("Prefix of {requested} days is outside the forecast of {available} days")]
    PrefixOutOfRange { requested: usize, available: usize },

    // Input errors
    #[error("Invalid forecast day {day_index}: {message}")]
    InvalidDay { day_index: u32, message: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalyticsError {
    /// Stable machine-readable code for the dashboard
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::EmptySeries => "EMPTY_SERIES",
            AnalyticsError::PrefixOutOfRange { .. } => "PREFIX_OUT_OF_RANGE",
            AnalyticsError::InvalidDay { .. } => "INVALID_DAY",
            AnalyticsError::Configuration(_) | AnalyticsError::ConfigLoad(_) => {
                "CONFIGURATION_ERROR"
            }
            AnalyticsError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Result type alias for engine operations
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
