//! Application errors.

use inkboard_core::{BoardError, ConfigError, StorageError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid script: {0}")]
    Script(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
