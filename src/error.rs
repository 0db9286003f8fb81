// error.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// A history bound of zero would drop every value on the next `set`.
    #[error("max heap must be at least 1, got {0}")]
    InvalidMaxHeap(usize),
    #[error("shared history state lock was poisoned")]
    Poisoned,
}

pub type Result<T, E = StateError> = std::result::Result<T, E>;
