use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    Config,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Config => write!(f, "Config"),
        }
    }
}

/// Structured application error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Config,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_has_correct_kind() {
        let err = AppError::config("bad file");
        assert_eq!(err.kind, AppErrorKind::Config);
        assert_eq!(err.message, "bad file");
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::config("config.toml: not found");
        assert_eq!(err.to_string(), "Config: config.toml: not found");
    }

    #[test]
    fn toml_error_converts_to_config_kind() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: AppError = toml_err.into();
        assert_eq!(err.kind, AppErrorKind::Config);
        assert!(!err.message.is_empty());
    }
}
