use crate::canvas::CanvasError;
use crate::catalog::CatalogError;
use crate::propagation::PropagationError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Propagation(#[from] PropagationError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("{value} is not an allowed option for {key}")]
    OptionNotAllowed { key: String, value: String },
    #[error("{key} is not an editable token")]
    NotEditable { key: String },
    #[error("failed to serialize token snapshot")]
    Snapshot(#[from] serde_json::Error),
}
