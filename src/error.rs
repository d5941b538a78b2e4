//! Error types for traffic-grid.

use thiserror::Error;

/// The main error type for traffic-grid operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load configuration.
    #[cfg(feature = "cli")]
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// The point spread cannot be used as a standard deviation.
    #[error("invalid point spread {spread}: must be finite and non-negative")]
    InvalidSpread {
        /// The rejected spread.
        spread: f64,
    },

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The windowing/rendering backend failed to start.
    #[error("dashboard failed to start: {0}")]
    Gui(String),
}

/// A specialized Result type for traffic-grid operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "cli")]
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Create a GUI start-up error.
    #[must_use]
    pub fn gui(message: impl Into<String>) -> Self {
        Self::Gui(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = Error::validation("initial_zoom must be within 0..=24");
        assert_eq!(
            err.to_string(),
            "invalid configuration: initial_zoom must be within 0..=24"
        );
    }

    #[test]
    fn test_invalid_spread_display() {
        let err = Error::InvalidSpread { spread: -1.0 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_gui_error_display() {
        let err = Error::gui("no display");
        assert_eq!(err.to_string(), "dashboard failed to start: no display");
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
