//! Owner cells and tagged, non-owning handles for borrowed values

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

use tracing::{debug, warn};

use super::Value;
use crate::error::{ContainerError, Result};

static NEXT_TAG: AtomicU32 = AtomicU32::new(1);

fn next_tag() -> u32 {
    NEXT_TAG.fetch_add(1, Ordering::Relaxed)
}

type Slot = RefCell<Box<dyn Value>>;

/// The external owner of a value that others may borrow.
///
/// Dropping the cell destroys the value. Handles obtained from
/// [`ValueCell::handle`] stay valid as objects but report
/// [`ContainerError::DanglingReference`] on every access afterwards.
///
/// # Example
///
/// ```
/// use claywork::{ContainerError, Playdoh, ValueCell};
///
/// let cell = ValueCell::new(Playdoh::new("red", 12));
/// let handle = cell.handle();
/// assert!(handle.is_live());
///
/// drop(cell);
/// assert_eq!(
///     handle.render(),
///     Err(ContainerError::DanglingReference { tag: handle.tag() })
/// );
/// ```
pub struct ValueCell {
    /// The owned value; the only strong reference
    slot: Rc<Slot>,

    /// Identifier shared with every handle into this cell
    tag: u32,
}

impl ValueCell {
    /// Take ownership of a value.
    pub fn new(value: impl Value) -> Self {
        Self::from_boxed(Box::new(value))
    }

    /// Take ownership of an already boxed value.
    pub fn from_boxed(value: Box<dyn Value>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(value)),
            tag: next_tag(),
        }
    }

    /// The cell's tag.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Create a non-owning handle to this cell's value.
    pub fn handle(&self) -> ValueRef {
        ValueRef {
            slot: Rc::downgrade(&self.slot),
            tag: self.tag,
        }
    }

    /// Number of live handles pointing at this cell.
    pub fn handle_count(&self) -> usize {
        Rc::weak_count(&self.slot)
    }

    /// Run `f` with shared access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&dyn Value) -> R) -> Result<R> {
        access(&self.slot, self.tag, f)
    }

    /// Run `f` with exclusive access to the value.
    ///
    /// Changes are visible through every handle.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut dyn Value) -> R) -> Result<R> {
        access_mut(&self.slot, self.tag, f)
    }

    /// Render the value.
    pub fn render(&self) -> Result<String> {
        self.with(|value| value.render())
    }

    /// Swap in a new value, returning the old one.
    pub fn replace(&self, value: Box<dyn Value>) -> Result<Box<dyn Value>> {
        self.with_mut_box(|slot| std::mem::replace(slot, value))
    }

    fn with_mut_box<R>(&self, f: impl FnOnce(&mut Box<dyn Value>) -> R) -> Result<R> {
        let mut slot = self
            .slot
            .try_borrow_mut()
            .map_err(|_| ContainerError::BorrowConflict { tag: self.tag })?;
        Ok(f(&mut slot))
    }
}

impl fmt::Debug for ValueCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("ValueCell");
        out.field("tag", &self.tag);
        match self.slot.try_borrow() {
            Ok(value) => out.field("value", &*value),
            Err(_) => out.field("value", &"<borrowed>"),
        };
        out.finish()
    }
}

impl Drop for ValueCell {
    fn drop(&mut self) {
        let handles = Rc::weak_count(&self.slot);
        if handles > 0 {
            debug!(tag = self.tag, handles, "value destroyed while still referenced");
        }
    }
}

/// A non-owning handle into a [`ValueCell`].
///
/// Cloning a handle copies the reference, never the value.
#[derive(Clone)]
pub struct ValueRef {
    /// Weak link to the owner's slot
    slot: Weak<Slot>,

    /// Tag of the cell this handle was created from
    tag: u32,
}

impl ValueRef {
    /// Tag of the cell this handle points into.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Whether the referenced cell still exists.
    pub fn is_live(&self) -> bool {
        self.slot.strong_count() > 0
    }

    /// Whether this handle points into `cell`.
    pub fn refers_to(&self, cell: &ValueCell) -> bool {
        std::ptr::eq(self.slot.as_ptr(), Rc::as_ptr(&cell.slot))
    }

    /// Whether two handles point into the same cell.
    pub fn ptr_eq(&self, other: &ValueRef) -> bool {
        self.slot.ptr_eq(&other.slot)
    }

    /// Run `f` with shared access to the referenced value.
    ///
    /// # Errors
    ///
    /// - `DanglingReference` if the cell was dropped
    /// - `BorrowConflict` if the value is currently mutably borrowed
    pub fn with<R>(&self, f: impl FnOnce(&dyn Value) -> R) -> Result<R> {
        let slot = self.upgrade()?;
        access(&slot, self.tag, f)
    }

    /// Run `f` with exclusive access to the referenced value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut dyn Value) -> R) -> Result<R> {
        let slot = self.upgrade()?;
        access_mut(&slot, self.tag, f)
    }

    /// Render the referenced value.
    pub fn render(&self) -> Result<String> {
        self.with(|value| value.render())
    }

    /// Clone the referenced value into a new, independently owned box.
    pub fn clone_value(&self) -> Result<Box<dyn Value>> {
        self.with(|value| value.clone_value())
    }

    fn upgrade(&self) -> Result<Rc<Slot>> {
        self.slot.upgrade().ok_or_else(|| {
            warn!(tag = self.tag, "access through dangling reference");
            ContainerError::DanglingReference { tag: self.tag }
        })
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRef")
            .field("tag", &self.tag)
            .field("live", &self.is_live())
            .finish()
    }
}

fn access<R>(slot: &Slot, tag: u32, f: impl FnOnce(&dyn Value) -> R) -> Result<R> {
    let value = slot
        .try_borrow()
        .map_err(|_| ContainerError::BorrowConflict { tag })?;
    Ok(f(&**value))
}

fn access_mut<R>(slot: &Slot, tag: u32, f: impl FnOnce(&mut dyn Value) -> R) -> Result<R> {
    let mut value = slot
        .try_borrow_mut()
        .map_err(|_| ContainerError::BorrowConflict { tag })?;
    Ok(f(&mut **value))
}
