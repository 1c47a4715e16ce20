//! Error handling for domain-sweep

use thiserror::Error;

/// Main error type for domain-sweep
#[derive(Error, Debug, Clone)]
pub enum DomainSweepError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Registrar error: {message}")]
    Registrar {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainSweepError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a registrar error (non-success response from the availability endpoint)
    pub fn registrar(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Registrar {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            url,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error aborts the run before any network activity.
    pub fn is_fatal_config(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Validation { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!(
                    "❌ Configuration problem: {}\n💡 Check your arguments and .env file",
                    message
                )
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format, see --help", message)
            }
            Self::Registrar { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!(
                    "❌ Registrar error{}: {}\n💡 Check your API key/secret and rate limits",
                    status, message
                )
            }
            Self::Network { message, .. } => {
                format!("❌ Network error: {}\n💡 Check your internet connection", message)
            }
            Self::Parse { message, .. } => {
                format!(
                    "❌ Parse error: {}\n💡 The registrar response format may have changed",
                    message
                )
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ File error{}: {}\n💡 Check file permissions and paths",
                    path_info, message
                )
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for DomainSweepError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string());

        if let Some(status) = err.status() {
            Self::registrar(err.to_string(), Some(status.as_u16()), url)
        } else if err.is_timeout() {
            Self::network("Request timed out", url)
        } else if err.is_connect() {
            Self::network("Connection failed", url)
        } else if err.is_decode() {
            Self::parse(err.to_string(), None)
        } else {
            Self::network(err.to_string(), url)
        }
    }
}

impl From<serde_json::Error> for DomainSweepError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainSweepError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainSweepError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DomainSweepError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainSweepError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DomainSweepError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainSweepError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrar_user_message_includes_status() {
        let err = DomainSweepError::registrar("Unauthorized", Some(401), None);
        assert_eq!(err.to_string(), "Registrar error: Unauthorized");
        assert!(err.user_message().contains("(401)"));
    }

    #[test]
    fn test_fatal_config_classification() {
        assert!(DomainSweepError::config("missing key").is_fatal_config());
        assert!(validation_error!("bad token {}", "CXC").is_fatal_config());
        assert!(!DomainSweepError::network("reset", None).is_fatal_config());
    }

    #[test]
    fn test_user_message_hints() {
        let err = DomainSweepError::io("denied", Some("output/x.txt".to_string()));
        let msg = err.user_message();
        assert!(msg.contains("output/x.txt"));
        assert!(msg.contains("permissions"));
    }
}
