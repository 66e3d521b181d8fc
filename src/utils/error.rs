use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error in '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Parse error{}: {message}", record_suffix(.record))]
    ParseError {
        record: Option<usize>,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Validation,
    Data,
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
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScreenerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn parse(record: Option<usize>, message: impl Into<String>) -> Self {
        Self::ParseError {
            record,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::ZipError(_) => ErrorCategory::Io,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Validation,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ParseError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } | Self::ConfigError { .. } => ErrorSeverity::High,
            Self::ParseError { .. } | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorSeverity::Medium
            }
            Self::IoError(_) | Self::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::ZipError(e) => format!("Could not build the export bundle: {}", e),
            Self::CsvError(e) => format!("Could not write the ranking table: {}", e),
            Self::SerializationError(e) => format!("Could not encode results: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::ValidationError { field, message } => {
                format!("Job requirements are invalid ({}): {}", field, message)
            }
            Self::ParseError { record, message } => match record {
                Some(index) => format!(
                    "Saved results are corrupt at record {}: {}",
                    index, message
                ),
                None => format!("Saved results are corrupt: {}", message),
            },
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is writable",
            ErrorCategory::Configuration => "Check the TOML syntax of the configuration file",
            ErrorCategory::Validation => {
                "Provide position, required_skills, required_experience and required_education in the [job] table"
            }
            ErrorCategory::Data => "Re-run the analysis to regenerate the results file",
        }
    }
}

fn record_suffix(record: &Option<usize>) -> String {
    record
        .map(|index| format!(" in record {}", index))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
