use thiserror::Error;

#[derive(Error, Debug)]
pub enum SavingsError {
    #[error("Unknown miles driven timeframe: {value:?}")]
    InvalidTimeframe { value: String },

    #[error("Fuel economy must be greater than zero, got {value}")]
    InvalidFuelEconomy { value: f64 },

    #[error("Cannot round non-finite number: {value}")]
    InvalidNumber { value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Calculation,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity; `Low` is not a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SavingsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SavingsError::InvalidTimeframe { .. } | SavingsError::InvalidFuelEconomy { .. } => {
                ErrorCategory::Input
            }
            SavingsError::InvalidNumber { .. } => ErrorCategory::Calculation,
            SavingsError::ConfigParseError { .. }
            | SavingsError::MissingConfigError { .. }
            | SavingsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SavingsError::IoError(_) | SavingsError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Calculation => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SavingsError::InvalidTimeframe { value } if value.is_empty() => {
                "Miles driven was entered without a timeframe".to_string()
            }
            SavingsError::InvalidTimeframe { value } => {
                format!("'{}' is not a known timeframe", value)
            }
            SavingsError::InvalidFuelEconomy { value } => {
                format!("A fuel economy of {} cannot be used in a calculation", value)
            }
            SavingsError::InvalidNumber { .. } => {
                "The calculation produced a value that is not a finite number".to_string()
            }
            SavingsError::IoError(e) => format!("Could not read or write a file: {}", e),
            SavingsError::SerializationError(e) => format!("Could not render the result: {}", e),
            SavingsError::ConfigParseError { message } => {
                format!("The configuration file could not be parsed: {}", message)
            }
            SavingsError::MissingConfigError { field } => format!("'{}' is required", field),
            SavingsError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SavingsError::InvalidTimeframe { .. } => "Use one of: week, month, year",
            SavingsError::InvalidFuelEconomy { .. } => {
                "Enter a fuel economy (miles per gallon) greater than zero for both vehicles"
            }
            SavingsError::InvalidNumber { .. } => {
                "Check that every price and fuel economy is a finite number"
            }
            SavingsError::IoError(_) => "Check that the file exists and is readable",
            SavingsError::SerializationError(_) => "Try the plain text output format",
            SavingsError::ConfigParseError { .. } => {
                "Make sure the file is valid TOML with [driving], [trade] and [new] sections"
            }
            SavingsError::MissingConfigError { .. } => {
                "Provide the value on the command line or in the configuration file"
            }
            SavingsError::InvalidConfigValueError { .. } => {
                "Prices and fuel economy must be positive; miles driven cannot be negative"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SavingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_input_errors() {
        let err = SavingsError::InvalidTimeframe {
            value: "decade".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("decade"));
        assert!(err.user_friendly_message().contains("decade"));
    }

    #[test]
    fn test_missing_timeframe_message() {
        let err = SavingsError::InvalidTimeframe {
            value: String::new(),
        };
        assert!(err.user_friendly_message().contains("without a timeframe"));
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);

        let err = SavingsError::InvalidFuelEconomy { value: 0.0 };
        assert_eq!(err.severity().exit_code(), 1);
        let err = SavingsError::InvalidNumber { value: f64::INFINITY };
        assert_eq!(err.severity().exit_code(), 2);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SavingsError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_invalid_number_is_calculation_error() {
        let err = SavingsError::InvalidNumber { value: f64::NAN };
        assert_eq!(err.category(), ErrorCategory::Calculation);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }
}
