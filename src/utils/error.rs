use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LambdaError {
    #[error("Cannot parse '{input}' as an integer: {source}")]
    ParseError {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Container factory failed: {message}")]
    InvalidFactoryError { message: String },

    #[error("Container rejected element: {message}")]
    ContainerOperationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Conversion,
    Collection,
    Configuration,
    System,
}

impl LambdaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LambdaError::ParseError { .. } => ErrorCategory::Conversion,
            LambdaError::InvalidFactoryError { .. }
            | LambdaError::ContainerOperationError { .. } => ErrorCategory::Collection,
            LambdaError::ConfigError { .. }
            | LambdaError::InvalidConfigValueError { .. }
            | LambdaError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LambdaError::IoError(_) | LambdaError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            LambdaError::ParseError { input, .. } => {
                format!("'{}' is not a valid integer", input)
            }
            LambdaError::InvalidFactoryError { .. } => {
                "Could not create the target collection".to_string()
            }
            LambdaError::ContainerOperationError { message } => {
                format!("An element could not be added: {}", message)
            }
            LambdaError::IoError(e) => format!("File access failed: {}", e),
            LambdaError::SerializationError(_) => "Could not render the report".to_string(),
            LambdaError::ConfigError { .. }
            | LambdaError::InvalidConfigValueError { .. }
            | LambdaError::MissingConfigError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Conversion => "Use a decimal integer literal such as \"100\"",
            ErrorCategory::Collection => "Check the collection kind and the elements supplied",
            ErrorCategory::Configuration => "Fix the TOML file or the command line arguments",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }

    /// 依錯誤類別決定行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Conversion => 2,
            ErrorCategory::Collection => 3,
            ErrorCategory::System => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, LambdaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_category() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = LambdaError::ParseError {
            input: "abc".to_string(),
            source,
        };

        assert_eq!(err.category(), ErrorCategory::Conversion);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("'abc'"));
        assert!(err.user_friendly_message().contains("not a valid integer"));
    }

    #[test]
    fn test_config_errors_share_category() {
        let missing = LambdaError::MissingConfigError {
            field: "convert.input".to_string(),
        };
        let invalid = LambdaError::InvalidConfigValueError {
            field: "collection.kind".to_string(),
            value: "tree".to_string(),
            reason: "unknown kind".to_string(),
        };

        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(missing.recovery_suggestion(), invalid.recovery_suggestion());
    }
}
