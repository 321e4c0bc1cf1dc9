use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Unexpected response shape: {message}")]
    ResponseShapeError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

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

    #[error("Invalid command: {message}")]
    CommandError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Configuration,
    Io,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn shape(message: impl Into<String>) -> Self {
        CatalogError::ResponseShapeError {
            message: message.into(),
        }
    }

    pub fn command(message: impl Into<String>) -> Self {
        CatalogError::CommandError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::NetworkError(_) | CatalogError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            CatalogError::ParseError(_) | CatalogError::ResponseShapeError { .. } => {
                ErrorCategory::Parse
            }
            CatalogError::IoError(_) => ErrorCategory::Io,
            CatalogError::UrlError(_)
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::CommandError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Parse => ErrorSeverity::High,
            ErrorCategory::Configuration | ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Fetch failures are never fatal; the user can re-trigger the same action.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Parse
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::NetworkError(_) => {
                "Could not reach the game data service.".to_string()
            }
            CatalogError::HttpStatusError { status, .. } => {
                format!("The game data service answered with status {}.", status)
            }
            CatalogError::ParseError(_) | CatalogError::ResponseShapeError { .. } => {
                "The game data service returned data in an unexpected format.".to_string()
            }
            CatalogError::IoError(e) => format!("File system error: {}", e),
            CatalogError::UrlError(e) => format!("A configured URL is invalid: {}", e),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required.", field)
            }
            CatalogError::CommandError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your connection and repeat the same action to retry.",
            ErrorCategory::Parse => {
                "The data service may be mid-release; try again later or pin another version."
            }
            ErrorCategory::Configuration => {
                "Fix the configuration file or command-line flags and start again."
            }
            ErrorCategory::Io => "Make sure the output directory exists and is writable.",
            ErrorCategory::Input => "Type 'help' to list the available commands.",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
