use std::fmt;
use thiserror::Error;

/// Field of a data line, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Time,
    Name,
    SerialNumber,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Time => write!(f, "time"),
            Field::Name => write!(f, "name"),
            Field::SerialNumber => write!(f, "serial number"),
        }
    }
}

/// Why a serial number field could not be turned into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialFieldError {
    NotAnInteger,
    OutOfRange,
}

impl fmt::Display for SerialFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialFieldError::NotAnInteger => write!(f, "is not a valid integer"),
            SerialFieldError::OutOfRange => write!(f, "is out of integer range"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Failed to open file {path}: {source}")]
    FileOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} format error (missing {missing} field)")]
    LineFormatError { line: usize, missing: Field },

    #[error("Line {line} format error (expected 3 fields, found {found})")]
    ExtraFieldError { line: usize, found: usize },

    #[error("Line {line} serial number {value} {reason}")]
    SerialNumberFormatError {
        line: usize,
        value: String,
        reason: SerialFieldError,
    },

    #[error("File contains only {available} lines, less than {required} required lines")]
    InsufficientLinesError { available: usize, required: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
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
    Format,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::FileOpenError { .. } | SearchError::InsufficientLinesError { .. } => {
                ErrorCategory::Input
            }
            SearchError::LineFormatError { .. }
            | SearchError::ExtraFieldError { .. }
            | SearchError::SerialNumberFormatError { .. }
            | SearchError::CsvError(_) => ErrorCategory::Format,
            SearchError::ConfigError { .. }
            | SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SearchError::IoError(_) | SearchError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Every fatal error maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SearchError::FileOpenError { path, .. } => {
                format!("Error: Failed to open file {}", path)
            }
            SearchError::InsufficientLinesError { .. }
            | SearchError::LineFormatError { .. }
            | SearchError::ExtraFieldError { .. }
            | SearchError::SerialNumberFormatError { .. } => format!("Error: {}", self),
            SearchError::CsvError(e) => format!("Error: data file could not be read: {}", e),
            SearchError::IoError(e) => format!("Error: input/output failure: {}", e),
            SearchError::SerializationError(e) => {
                format!("Error: report could not be serialized: {}", e)
            }
            _ => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::FileOpenError { .. } => {
                "Check that the data file exists and is readable, or pass --file"
            }
            SearchError::InsufficientLinesError { .. } => {
                "Request fewer lines or supply a longer data file"
            }
            SearchError::LineFormatError { .. } | SearchError::ExtraFieldError { .. } => {
                "Each line must be <time><TAB><name><TAB><serial number>"
            }
            SearchError::SerialNumberFormatError { .. } => {
                "Serial numbers must be 32-bit signed integers"
            }
            SearchError::CsvError(_) | SearchError::IoError(_) => {
                "Verify the file is plain text and retry"
            }
            SearchError::SerializationError(_) => "Try --format text",
            SearchError::ConfigError { .. }
            | SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and TOML configuration"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
