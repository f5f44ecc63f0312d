use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{method} {endpoint} failed: {cause}")]
    RequestError {
        method: String,
        endpoint: String,
        cause: String,
    },

    #[error("Unexpected payload from {endpoint}: {reason}")]
    FormatError { endpoint: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
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
    Network,
    Data,
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

impl AppError {
    pub fn request(method: &str, endpoint: &str, cause: impl std::fmt::Display) -> Self {
        AppError::RequestError {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            cause: cause.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::RequestError { .. } => ErrorCategory::Network,
            AppError::FormatError { .. }
            | AppError::SerializationError(_)
            | AppError::CsvError(_) => ErrorCategory::Data,
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
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
            AppError::RequestError { .. } => {
                "Check the network connection and that --base-url points at a reachable API"
                    .to_string()
            }
            AppError::FormatError { .. } => {
                "The API answered with an unexpected shape; verify the base URL serves the breed catalog"
                    .to_string()
            }
            AppError::ConfigValidationError { field, .. }
            | AppError::InvalidConfigValueError { field, .. }
            | AppError::MissingConfigError { field } => {
                format!("Fix the '{}' setting in the config file or command line", field)
            }
            AppError::IoError(_) => "Check file permissions and paths".to_string(),
            AppError::SerializationError(_) | AppError::CsvError(_) => {
                "Try a different --format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::RequestError { endpoint, .. } => {
                format!("Could not reach the breed API ({})", endpoint)
            }
            AppError::FormatError { endpoint, .. } => {
                format!("The breed API returned data we could not read ({})", endpoint)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
