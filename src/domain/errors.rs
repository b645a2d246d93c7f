use std::fmt::{Display, Formatter, Result as FmtResult};

/// Root error type. The zoom pipeline itself never fails; errors only
/// surface where configuration or JavaScript input enters the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Configuration(ConfigurationError),
    Presentation(PresentationError),
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    InvalidJson(String),
    InvalidParameter { name: &'static str, reason: String },
    InvalidMode(String),
}

/// Presentation layer errors (wasm boundary)
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationError {
    DeserializationFailed(String),
    SerializationFailed(String),
    CallbackFailed(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AppError::Configuration(e) => write!(f, "Configuration Error: {}", e),
            AppError::Presentation(e) => write!(f, "Presentation Error: {}", e),
        }
    }
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ConfigurationError::InvalidJson(msg) => write!(f, "invalid json: {}", msg),
            ConfigurationError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{}`: {}", name, reason)
            }
            ConfigurationError::InvalidMode(mode) => {
                write!(f, "invalid zoom mode `{}` (expected x, y or xy)", mode)
            }
        }
    }
}

impl Display for PresentationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PresentationError::DeserializationFailed(msg) => write!(f, "deserialization failed: {}", msg),
            PresentationError::SerializationFailed(msg) => write!(f, "serialization failed: {}", msg),
            PresentationError::CallbackFailed(msg) => write!(f, "callback failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ConfigurationError {}
impl std::error::Error for PresentationError {}

impl From<ConfigurationError> for AppError {
    fn from(error: ConfigurationError) -> Self {
        AppError::Configuration(error)
    }
}

impl From<PresentationError> for AppError {
    fn from(error: PresentationError) -> Self {
        AppError::Presentation(error)
    }
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(error: serde_json::Error) -> Self {
        ConfigurationError::InvalidJson(error.to_string())
    }
}

pub type ConfigResult<T> = Result<T, AppError>;
