use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid integer token '{token}' at position {position}")]
    InvalidToken { position: usize, token: String },

    #[error("No array size was provided")]
    MissingSize,

    #[error("Unexpected end of input: expected {expected} values, read {read}")]
    UnexpectedEof { expected: usize, read: usize },

    #[error("Array size cannot be negative: {0}")]
    NegativeSize(i64),

    #[error("Array size {size} exceeds the limit of {limit}")]
    SizeLimitExceeded { size: usize, limit: usize },

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
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::InvalidToken { .. }
            | CheckError::MissingSize
            | CheckError::UnexpectedEof { .. }
            | CheckError::NegativeSize(_)
            | CheckError::SizeLimitExceeded { .. } => ErrorCategory::Input,
            CheckError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CheckError::IoError(_) | CheckError::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Process exit code for this error. `0` is reserved for a printed verdict.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::InvalidToken { token, .. } => {
                format!("'{}' is not a valid integer", token)
            }
            CheckError::MissingSize => "Input ended before the array size was given".to_string(),
            CheckError::UnexpectedEof { expected, read } => format!(
                "Input ended early: {} of {} values were provided",
                read, expected
            ),
            CheckError::NegativeSize(size) => {
                format!("The size of the array must not be negative (got {})", size)
            }
            CheckError::SizeLimitExceeded { size, limit } => format!(
                "The array size {} is larger than the allowed maximum {} (see --max-size)",
                size, limit
            ),
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid option --{}: {}", field.replace('_', "-"), reason)
            }
            CheckError::IoError(e) => format!("Could not read or write the console: {}", e),
            CheckError::SerializationError(e) => format!("Could not encode the report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
