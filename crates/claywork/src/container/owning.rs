//! Owning container (composition)

use std::fmt;

use tracing::{debug, trace};

use super::{check_capacity, check_index};
use crate::config::ContainerConfig;
use crate::error::{ContainerError, Result};
use crate::value::{Value, ValueRef};

/// A sequence of values the container exclusively owns.
///
/// Each value is destroyed exactly once: when it is removed, when the
/// container is cleared, or when the container itself is dropped. Copying
/// the container clones every value through the interface, so a copy
/// never aliases its source.
///
/// # Example
///
/// ```
/// use claywork::{Clay, OwningContainer, Playdoh};
///
/// let mut original = OwningContainer::new();
/// original.add(Playdoh::new("red", 12)).unwrap();
/// original.add(Clay::new("grey", 500)).unwrap();
///
/// let copy = original.copy();
/// drop(original);
///
/// assert_eq!(copy.render_at(0).unwrap(), r#"Playdoh { color: "red", weight: 12 }"#);
/// assert_eq!(copy.render_at(1).unwrap(), r#"Clay { color: "grey", weight: 500 }"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OwningContainer {
    /// Owned values in insertion order
    values: Vec<Box<dyn Value>>,

    /// Sizing limits
    config: ContainerConfig,
}

impl OwningContainer {
    /// Create an empty, unbounded container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty container with the given limits.
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            values: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// The container's configuration.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════
    // Insertion
    // ═══════════════════════════════════════════════════════════════════

    /// Take ownership of `value` and append it.
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the container is full
    pub fn add(&mut self, value: impl Value) -> Result<()> {
        self.add_boxed(Box::new(value))
    }

    /// Take ownership of an already boxed value and append it.
    pub fn add_boxed(&mut self, value: Box<dyn Value>) -> Result<()> {
        check_capacity(&self.config, self.values.len())?;
        trace!(
            variant = value.variant_name(),
            index = self.values.len(),
            "value added"
        );
        self.values.push(value);
        Ok(())
    }

    /// Append a clone of a value owned by someone else.
    ///
    /// The container never aliases `value`; later changes to it are not
    /// seen here.
    pub fn add_cloned(&mut self, value: &dyn Value) -> Result<()> {
        check_capacity(&self.config, self.values.len())?;
        self.add_boxed(value.clone_value())
    }

    /// Append a snapshot of the value behind a handle.
    ///
    /// # Errors
    ///
    /// - `DanglingReference` if the handle's cell is gone
    /// - `BorrowConflict` if the value is mutably borrowed
    /// - `CapacityExceeded` if the container is full
    pub fn add_cloned_from(&mut self, handle: &ValueRef) -> Result<()> {
        check_capacity(&self.config, self.values.len())?;
        let value = handle.clone_value()?;
        self.add_boxed(value)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Removal
    // ═══════════════════════════════════════════════════════════════════

    /// Destroy the value at `index` and close the gap.
    ///
    /// # Errors
    ///
    /// - `IndexError` if `index >= len`; the container is unchanged
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let value = self.take(index)?;
        debug!(variant = value.variant_name(), index, "value destroyed");
        Ok(())
    }

    /// Remove the value at `index` and hand ownership to the caller.
    pub fn take(&mut self, index: usize) -> Result<Box<dyn Value>> {
        check_index(index, self.values.len())?;
        Ok(self.values.remove(index))
    }

    /// Destroy every value.
    pub fn clear(&mut self) {
        if !self.values.is_empty() {
            debug!(count = self.values.len(), "values destroyed");
        }
        self.values.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Copying
    // ═══════════════════════════════════════════════════════════════════

    /// Deep copy: every value is cloned through the interface.
    ///
    /// The copy compares equal to `self` index by index but shares no
    /// values with it.
    pub fn copy(&self) -> Self {
        debug!(count = self.values.len(), "deep copy");
        self.clone()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Access and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Borrow the value at `index`.
    pub fn get(&self, index: usize) -> Result<&dyn Value> {
        self.values
            .get(index)
            .map(|value| &**value)
            .ok_or_else(|| ContainerError::index(index, self.values.len()))
    }

    /// Mutably borrow the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut dyn Value> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .map(|value| &mut **value)
            .ok_or_else(|| ContainerError::index(index, len))
    }

    /// Iterate over the values in order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Value> {
        self.values.iter().map(|value| &**value)
    }

    /// Index of the first value that compares equal to `needle`.
    pub fn position(&self, needle: &dyn Value) -> Option<usize> {
        self.values.iter().position(|value| value.compare(needle))
    }

    /// Render the value at `index`.
    pub fn render_at(&self, index: usize) -> Result<String> {
        self.get(index).map(|value| value.render())
    }

    /// Render every value as `[a, b, ...]`.
    pub fn render(&self) -> String {
        let items = self
            .values
            .iter()
            .map(|value| value.render())
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", items)
    }

    /// Structural equality: same length and `compare` true at every index.
    pub fn compare(&self, other: &OwningContainer) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.compare(&**b))
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the container is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PartialEq for OwningContainer {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

impl fmt::Display for OwningContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Box<dyn Value>> for OwningContainer {
    fn from_iter<I: IntoIterator<Item = Box<dyn Value>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            config: ContainerConfig::default(),
        }
    }
}

impl IntoIterator for OwningContainer {
    type Item = Box<dyn Value>;
    type IntoIter = std::vec::IntoIter<Box<dyn Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
