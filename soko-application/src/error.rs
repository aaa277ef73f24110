use soko_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use thiserror::Error;

pub use soko_core::usecases::ErrorKind;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] UsecaseError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Coarse error class, for callers mapping failures onto
    /// transport responses.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Business(err) => err.kind(),
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        Self::Business(err.into())
    }
}
