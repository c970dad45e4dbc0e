// Domain Error Types

use super::relative_time::FormatError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Selection out of range: index {index}, {len} quakes loaded")]
    SelectionOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DomainError>;
