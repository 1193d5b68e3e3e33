//! Borrowing container (aggregation)

use tracing::{debug, trace};

use super::{check_capacity, check_index, OwningContainer};
use crate::config::ContainerConfig;
use crate::error::{ContainerError, Result};
use crate::value::{Value, ValueCell, ValueRef};

/// A sequence of handles to values owned by [`ValueCell`]s elsewhere.
///
/// The container never clones and never destroys a referent. Reads go
/// through the handle, so changes made by the owner are visible here.
/// If an owner drops its cell first, every access through the stale
/// handle fails with [`ContainerError::DanglingReference`].
///
/// Cloning the container copies the handles, not the values.
///
/// # Example
///
/// ```
/// use claywork::{BorrowingContainer, Playdoh, ValueCell};
///
/// let dough = ValueCell::new(Playdoh::new("red", 12));
/// let mut shelf = BorrowingContainer::new();
/// shelf.add(&dough).unwrap();
///
/// dough
///     .with_mut(|v| v.downcast_mut::<Playdoh>().unwrap().weight = 20)
///     .unwrap();
/// assert_eq!(shelf.render_at(0).unwrap(), r#"Playdoh { color: "red", weight: 20 }"#);
///
/// shelf.remove(0).unwrap();
/// assert!(shelf.is_empty());
/// assert!(dough.render().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BorrowingContainer {
    /// Handles in insertion order
    refs: Vec<ValueRef>,

    /// Sizing limits
    config: ContainerConfig,
}

impl BorrowingContainer {
    /// Create an empty, unbounded container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with the given limits.
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            refs: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// The container's configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════
    // Insertion and Removal
    // ═══════════════════════════════════════════════════════════════════

    /// Store a handle to the value owned by `cell`.
    pub fn add(&mut self, cell: &ValueCell) -> Result<()> {
        self.add_ref(cell.handle())
    }

    /// Store an existing handle.
    ///
    /// A handle that is already dangling is accepted; the error surfaces
    /// on access.
    pub fn add_ref(&mut self, handle: ValueRef) -> Result<()> {
        check_capacity(&self.config, self.refs.len())?;
        trace!(tag = handle.tag(), index = self.refs.len(), "reference added");
        self.refs.push(handle);
        Ok(())
    }

    /// Remove the handle at `index` and return it.
    ///
    /// The referenced value is not touched.
    pub fn remove(&mut self, index: usize) -> Result<ValueRef> {
        check_index(index, self.refs.len())?;
        let handle = self.refs.remove(index);
        trace!(tag = handle.tag(), index, "reference removed");
        Ok(handle)
    }

    /// Drop every dangling handle, returning how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.refs.len();
        self.refs.retain(ValueRef::is_live);
        let pruned = before - self.refs.len();
        if pruned > 0 {
            debug!(pruned, remaining = self.refs.len(), "dangling references pruned");
        }
        pruned
    }

    /// Forget every handle.
    pub fn clear(&mut self) {
        self.refs.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Access Through Handles
    // ═══════════════════════════════════════════════════════════════════

    /// The handle at `index`.
    pub fn get(&self, index: usize) -> Result<&ValueRef> {
        self.refs
            .get(index)
            .ok_or_else(|| ContainerError::index(index, self.refs.len()))
    }

    /// Run `f` with shared access to the value at `index`.
    ///
    /// # Errors
    ///
    /// - `IndexError` if `index >= len`
    /// - `DanglingReference` if the referent was destroyed
    /// - `BorrowConflict` if the referent is mutably borrowed
    pub fn with<R>(&self, index: usize, f: impl FnOnce(&dyn Value) -> R) -> Result<R> {
        self.get(index)?.with(f)
    }

    /// Run `f` with exclusive access to the value at `index`.
    pub fn with_mut<R>(&self, index: usize, f: impl FnOnce(&mut dyn Value) -> R) -> Result<R> {
        self.get(index)?.with_mut(f)
    }

    /// Render the value at `index`.
    pub fn render_at(&self, index: usize) -> Result<String> {
        self.get(index)?.render()
    }

    /// Render every value as `[a, b, ...]`.
    ///
    /// Fails on the first dangling handle.
    pub fn render(&self) -> Result<String> {
        let items = self
            .refs
            .iter()
            .map(ValueRef::render)
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("[{}]", items.join(", ")))
    }

    /// Whether the handle at `index` still points at a live value.
    pub fn is_live(&self, index: usize) -> Result<bool> {
        self.get(index).map(ValueRef::is_live)
    }

    /// Number of handles whose referent is gone.
    pub fn dangling_count(&self) -> usize {
        self.refs.iter().filter(|handle| !handle.is_live()).count()
    }

    /// Whether any handle points into `cell`.
    pub fn contains(&self, cell: &ValueCell) -> bool {
        self.refs.iter().any(|handle| handle.refers_to(cell))
    }

    /// Iterate over the handles in order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueRef> {
        self.refs.iter()
    }

    /// Number of handles (live or dangling).
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Conversion
    // ═══════════════════════════════════════════════════════════════════

    /// Deep snapshot of every referent into a new owning container.
    ///
    /// All-or-nothing: a dangling handle fails the whole call.
    pub fn to_owning(&self) -> Result<OwningContainer> {
        let mut owned = OwningContainer::with_config(self.config);
        for handle in &self.refs {
            owned.add_cloned_from(handle)?;
        }
        Ok(owned)
    }
}
