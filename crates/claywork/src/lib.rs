//! # Claywork
//!
//! Polymorphic values with virtual cloning, structural equality and
//! ownership-aware containers.
//!
//! Every concrete value type implements the [`Value`] trait and can then be
//! copied, compared and rendered through `&dyn Value` without the caller
//! knowing which variant it holds. Values are stored in one of two
//! containers:
//!
//! - **[`OwningContainer`]** (composition): owns its values, deep-copies
//!   them on copy, destroys them when removed or dropped.
//! - **[`BorrowingContainer`]** (aggregation): holds [`ValueRef`] handles
//!   into [`ValueCell`]s owned elsewhere and never destroys a referent.
//!   Access through a handle whose cell is gone reports
//!   [`ContainerError::DanglingReference`].
//!
//! ## Threading
//!
//! Everything here is single-threaded. [`Value`] carries no `Send` bound
//! and cells are built on `Rc`, so values, handles and both containers
//! stay on the thread that created them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod container;
pub mod error;
pub mod value;

// Re-export main types
pub use config::ContainerConfig;
pub use container::{BorrowingContainer, OwningContainer};
pub use error::{ContainerError, Result};
pub use value::{compare_fields, Clay, Playdoh, Value, ValueCell, ValueRef};

// Field maps returned by `Value::fields`
pub use indexmap::IndexMap;

/// Claywork version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
