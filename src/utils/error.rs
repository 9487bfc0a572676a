use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, KataError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KataError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KataError::IoError(_) => ErrorSeverity::Critical,
            KataError::TomlError(_)
            | KataError::ConfigError { .. }
            | KataError::MissingConfigError { .. }
            | KataError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            KataError::SerializationError(_) | KataError::ValidationError { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KataError::IoError(_) => {
                "Check that the configuration file exists and is readable".to_string()
            }
            KataError::TomlError(_) => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            KataError::SerializationError(_) => {
                "Report output could not be serialized; re-run without --json".to_string()
            }
            KataError::ConfigError { .. } | KataError::MissingConfigError { .. } => {
                "Run with --help to see the accepted options".to_string()
            }
            KataError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and retry", field)
            }
            KataError::ValidationError { .. } => {
                "Adjust the offending value and retry".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            KataError::IoError(e) => format!("Could not read the configuration file: {}", e),
            KataError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            KataError::SerializationError(e) => format!("Could not render the report: {}", e),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = KataError::InvalidConfigValueError {
            field: "logger_backend".to_string(),
            value: "syslog".to_string(),
            reason: "expected 'file' or 'database'".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("logger_backend"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = KataError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
