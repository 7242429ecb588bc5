use std::path::PathBuf;
use thiserror::Error;

use crate::category::Category;

#[derive(Debug, Error)]
pub enum ShipyardError {
    #[error("file: '{}' does not exist!", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file: '{}' could not be opened: {source}", path.display())]
    FileUnopenable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("missing category: no part was assigned to {}", category.label())]
    MissingCategory { category: Category },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShipyardError>;
