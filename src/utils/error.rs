use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaError {
    #[error("Invalid axis '{field}' = {value}: {reason}")]
    InvalidAxis {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed input row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Domain,
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AreaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AreaError::InvalidAxis { .. } => ErrorCategory::Domain,
            AreaError::IoError(_) => ErrorCategory::Io,
            AreaError::CsvError(_)
            | AreaError::MalformedRow { .. }
            | AreaError::SerializationError(_) => ErrorCategory::Data,
            AreaError::ConfigError { .. }
            | AreaError::ConfigValidationError { .. }
            | AreaError::InvalidConfigValueError { .. }
            | AreaError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AreaError::InvalidAxis { .. } => ErrorSeverity::Medium,
            AreaError::CsvError(_)
            | AreaError::MalformedRow { .. }
            | AreaError::ConfigError { .. }
            | AreaError::ConfigValidationError { .. }
            | AreaError::InvalidConfigValueError { .. }
            | AreaError::MissingConfigError { .. } => ErrorSeverity::High,
            AreaError::IoError(_) | AreaError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AreaError::InvalidAxis { field, .. } if field.starts_with("row ") => format!(
                "Use a finite, non-negative length for '{}', or run with --policy skip to drop such rows",
                field
            ),
            AreaError::InvalidAxis { field, .. } => {
                format!("Use a finite, non-negative length for '{}'", field)
            }
            AreaError::IoError(_) => {
                "Check that the file exists and that the output directory is writable".to_string()
            }
            AreaError::CsvError(_) => {
                "Make sure the input CSV has semi_major_axis and semi_minor_axis columns with numeric values"
                    .to_string()
            }
            AreaError::MalformedRow { row, .. } => format!(
                "Fix row {}: headerless input needs exactly two numeric columns, semi_major_axis,semi_minor_axis",
                row
            ),
            AreaError::SerializationError(_) => {
                "Re-run with --verbose and report the record that failed to serialize".to_string()
            }
            AreaError::ConfigError { .. } | AreaError::ConfigValidationError { .. } => {
                "Review the configuration file or command-line flags".to_string()
            }
            AreaError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            AreaError::MissingConfigError { field } => format!("Provide a value for '{}'", field),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Domain => format!("Ellipse outside the supported domain: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Data => format!("Could not process the data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    /// Exit code the binaries use for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_axis_classification() {
        let err = AreaError::InvalidAxis {
            field: "semi_major_axis".to_string(),
            value: -1.0,
            reason: "must not be negative".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Domain);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("semi_major_axis"));
        assert!(err.recovery_suggestion().contains("semi_major_axis"));
        assert!(!err.recovery_suggestion().contains("--policy"));
    }

    #[test]
    fn test_row_scoped_axis_suggests_skip_policy() {
        let err = AreaError::InvalidAxis {
            field: "row 4 semi_minor_axis".to_string(),
            value: f64::NAN,
            reason: "Axis length is NaN".to_string(),
        };
        assert!(err.recovery_suggestion().contains("--policy skip"));
    }

    #[test]
    fn test_malformed_row_is_data_error() {
        let err = AreaError::MalformedRow {
            row: 3,
            reason: "expected 2 columns, found 3".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: AreaError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("File access failed"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = AreaError::MissingConfigError {
            field: "input.path".to_string(),
        };
        let invalid = AreaError::InvalidConfigValueError {
            field: "output.path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(missing.exit_code(), 1);
    }
}
