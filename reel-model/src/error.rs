use thiserror::Error;

/// Errors produced by model constructors and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown photo type: {0}")]
    UnknownPhotoType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
