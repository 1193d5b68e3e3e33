//! Containers holding values through the [`Value`](crate::Value) interface
//!
//! - [`OwningContainer`]: composition; values live and die with the container
//! - [`BorrowingContainer`]: aggregation; handles into cells owned elsewhere

mod borrowing;
mod owning;

pub use borrowing::BorrowingContainer;
pub use owning::OwningContainer;

use crate::config::ContainerConfig;
use crate::error::{ContainerError, Result};

/// Refuse an insert that would push `len` past the configured limit.
fn check_capacity(config: &ContainerConfig, len: usize) -> Result<()> {
    match config.max_len {
        Some(max) if !config.admits(len) => Err(ContainerError::CapacityExceeded { max }),
        _ => Ok(()),
    }
}

/// Validate `index` against `len`.
fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(ContainerError::index(index, len))
    }
}
