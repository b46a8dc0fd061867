use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a menu document could not be turned into a [`Menu`](super::aggregate::Menu)
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LoadError {
    #[error("menu '{0}' not found")]
    NotFound(String),

    #[error("menu unavailable: {0}")]
    Unavailable(String),

    #[error("malformed menu document: {0}")]
    Malformed(String),

    #[error("invalid menu document: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}
