use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Not enough participants: {unique} unique, at least {required} required")]
    InvalidInput { unique: usize, required: usize },

    #[error("Repair scan exhausted at index {index} of {size} without a swap target")]
    RepairExhausted { index: usize, size: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
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
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::InvalidInput { .. } => ErrorCategory::Input,
            SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SantaError::IoError(_) | SantaError::SerializationError(_) => ErrorCategory::System,
            SantaError::RepairExhausted { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Medium,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::InvalidInput { unique, required } => format!(
                "A Secret Santa draw needs at least {} different participants, but only {} were given",
                required, unique
            ),
            SantaError::RepairExhausted { .. } => {
                "The draw could not produce a valid assignment".to_string()
            }
            SantaError::IoError(e) => format!("Could not read the roster file: {}", e),
            SantaError::SerializationError(e) => format!("Could not render the result: {}", e),
            SantaError::ConfigValidationError { field, message } => {
                format!("The roster file is invalid ({}): {}", field, message)
            }
            SantaError::InvalidConfigValueError { field, value, reason } => {
                format!("Roster value '{}' in {} is invalid: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::InvalidInput { .. } => "Add more participants to the roster",
            SantaError::RepairExhausted { .. } => {
                "This is a bug in the draw algorithm; please report it with the roster used"
            }
            SantaError::IoError(_) => "Check that the roster path exists and is readable",
            SantaError::SerializationError(_) => "Try the default text output format",
            SantaError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML with a [group] table and a participants array"
            }
            SantaError::InvalidConfigValueError { .. } => {
                "Use non-empty participant names and list each person only once"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
