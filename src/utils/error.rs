use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error("Request to query service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error [{status}]: {body}")]
    Http { status: u16, body: String },

    #[error("Unable to decode query response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Service,
    Data,
}

impl QuakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuakeError::Transport(_) => ErrorCategory::Network,
            QuakeError::Http { .. } => ErrorCategory::Service,
            QuakeError::Decode(_) => ErrorCategory::Data,
            QuakeError::IoError(_)
            | QuakeError::ConfigError { .. }
            | QuakeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags or configuration file",
            ErrorCategory::Network => "Check the service address and network connectivity",
            ErrorCategory::Service => "Check the query filters; the service rejected the request",
            ErrorCategory::Data => "The service returned an unexpected response format",
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_carries_status_and_body() {
        let err = QuakeError::Http {
            status: 404,
            body: "not found".to_string(),
        };

        assert_eq!(err.to_string(), "error [404]: not found");
        assert_eq!(err.category(), ErrorCategory::Service);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_use_distinct_exit_code() {
        let err = QuakeError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = QuakeError::InvalidConfigValueError {
            field: "minmag".to_string(),
            value: "-1".to_string(),
            reason: "Value must not be negative".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("minmag"));
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: QuakeError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.category(), ErrorCategory::Data);
    }
}
