//! Error types and handling for the weatherdash application

use thiserror::Error;

/// Main error type for the weatherdash application
#[derive(Error, Debug)]
pub enum WeatherDashError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors (transport failures, non-success statuses)
    #[error("API error: {message}")]
    Api { message: String },

    /// Responses that arrived but do not have the expected shape
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WeatherDashError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherDashError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherDashError::Api { .. } => {
                "Unable to reach external services. Please check your internet connection."
                    .to_string()
            }
            WeatherDashError::MalformedResponse { .. } => {
                "A weather service returned data we could not understand. Please retry."
                    .to_string()
            }
            WeatherDashError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherDashError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            WeatherDashError::General { message } => message.clone(),
        }
    }
}
