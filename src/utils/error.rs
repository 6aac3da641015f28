use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgeGateError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Could not parse age from input: {input:?}")]
    ParseError { input: String },

    #[error("No age was entered")]
    EmptyInput,

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AgeGateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AgeGateError::ParseError { .. } | AgeGateError::EmptyInput => ErrorCategory::Input,
            AgeGateError::ConfigValidationError { .. }
            | AgeGateError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AgeGateError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AgeGateError::ParseError { .. } => "Enter the age as a number, e.g. 21 or 17.5".to_string(),
            AgeGateError::EmptyInput => "Type an age and press Enter".to_string(),
            AgeGateError::ConfigValidationError { field, .. } => {
                format!("Check the TOML syntax around '{}'", field)
            }
            AgeGateError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or pass it on the command line", field)
            }
            AgeGateError::IoError(_) => "Check that stdin and stdout are available".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AgeGateError::ParseError { input } => format!("'{}' is not a number", input),
            AgeGateError::EmptyInput => "No age was entered".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgeGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_exit_with_one() {
        let err = AgeGateError::ParseError {
            input: "abc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity().exit_code(), 1);
        assert_eq!(AgeGateError::EmptyInput.severity().exit_code(), 1);
    }

    #[test]
    fn test_config_and_io_severity() {
        let err = AgeGateError::InvalidConfigValueError {
            field: "prompt.text".to_string(),
            value: String::new(),
            reason: "empty".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let io = AgeGateError::from(std::io::Error::other("closed"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(io.severity().exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message() {
        let err = AgeGateError::ParseError {
            input: "twelve".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "'twelve' is not a number");
    }
}
