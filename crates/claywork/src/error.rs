//! Error types for container and handle operations

use thiserror::Error;

/// Main error type for claywork operations.
///
/// Comparing values of different variants is not an error; `compare`
/// simply returns `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// Position outside the container's valid range
    #[error("Index error: index {index} out of bounds for length {len}")]
    IndexError {
        /// Requested index
        index: usize,
        /// Container length at the time of the call
        len: usize,
    },

    /// A handle was used after the cell it points into was dropped
    #[error("Dangling reference: value #{tag} was destroyed while still referenced")]
    DanglingReference {
        /// Tag of the destroyed cell
        tag: u32,
    },

    /// The referenced value is already mutably borrowed
    #[error("Borrow conflict: value #{tag} is already borrowed")]
    BorrowConflict {
        /// Tag of the contended cell
        tag: u32,
    },

    /// The container is at its configured maximum length
    #[error("Capacity exceeded: container holds at most {max} values")]
    CapacityExceeded {
        /// Configured maximum length
        max: usize,
    },
}

impl ContainerError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        ContainerError::IndexError { index, len }
    }
}

/// Result type alias for claywork operations
pub type Result<T> = std::result::Result<T, ContainerError>;
