use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Source document not found: {path}")]
    SourceNotFoundError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Source document is not valid UTF-8: {path}")]
    EncodingError { path: String },

    #[error("Could not find body")]
    BodyNotFoundError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::SourceNotFoundError { .. } | ConvertError::IoError(_) => {
                ErrorCategory::Io
            }
            ConvertError::EncodingError { .. } | ConvertError::BodyNotFoundError => {
                ErrorCategory::Input
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvertError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Medium,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::SourceNotFoundError { path } => {
                format!("Check that '{}' exists or pass another file with --input", path)
            }
            ConvertError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            ConvertError::EncodingError { .. } => {
                "Re-save the source document as UTF-8".to_string()
            }
            ConvertError::BodyNotFoundError => {
                "Make sure the source contains literal <body> and </body> tags".to_string()
            }
            ConvertError::SerializationError(_) => {
                "Re-run with --verbose and report the failing output".to_string()
            }
            ConvertError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            ConvertError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::SourceNotFoundError { path } => {
                format!("Source document '{}' does not exist", path)
            }
            ConvertError::IoError(e) => format!("File operation failed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_not_found_is_input_error() {
        let err = ConvertError::BodyNotFoundError;
        assert_eq!(err.to_string(), "Could not find body");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = ConvertError::SourceNotFoundError {
            path: "../index.html".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("../index.html"));
    }

    #[test]
    fn test_serialization_errors_exit_with_two() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConvertError::from(json_err);
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = ConvertError::InvalidConfigValueError {
            field: "load.output_path".to_string(),
            value: "page.html".to_string(),
            reason: "Unsupported file extension".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
    }
}
