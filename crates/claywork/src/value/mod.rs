//! The polymorphic value interface and its built-in variants

mod display;
mod refs;
mod variants;

pub use refs::{ValueCell, ValueRef};
pub use variants::{Clay, Playdoh};

use std::fmt;

use downcast_rs::{impl_downcast, Downcast};
use dyn_clone::DynClone;
use indexmap::IndexMap;

/// The capability set every concrete value provides.
///
/// Callers work with `&dyn Value` / `Box<dyn Value>` and never name the
/// concrete type:
///
/// - **compare**: structural equality, `false` across variants
/// - **clone**: `Box<dyn Value>` is `Clone`, producing the same variant
/// - **render**: deterministic text, no side effects
///
/// New variants are added by implementing this trait; nothing in the crate
/// enumerates them.
///
/// # Example
///
/// ```
/// use claywork::{Clay, Playdoh, Value};
///
/// let original: Box<dyn Value> = Box::new(Playdoh::new("red", 12));
/// let mut copy = original.clone();
///
/// assert!(original.compare(copy.as_ref()));
///
/// copy.downcast_mut::<Playdoh>().unwrap().color = "blue".into();
/// assert!(!original.compare(copy.as_ref()));
/// assert_eq!(original.render(), r#"Playdoh { color: "red", weight: 12 }"#);
///
/// // Same fields, different variant
/// assert!(!original.compare(&Clay::new("red", 12)));
/// ```
pub trait Value: DynClone + Downcast + fmt::Debug + 'static {
    /// Name of the concrete variant (e.g., "Playdoh", "Clay")
    fn variant_name(&self) -> &'static str;

    /// Field values in declaration order, already formatted for display.
    fn fields(&self) -> IndexMap<&'static str, String>;

    /// True iff `other` is the same variant with equal fields.
    ///
    /// Must return `false`, never panic, for any other variant. Most
    /// implementations delegate to [`compare_fields`].
    fn compare(&self, other: &dyn Value) -> bool;

    /// Human-readable text, e.g. `Playdoh { color: "red", weight: 12 }`.
    fn render(&self) -> String {
        let fields = self.fields();
        if fields.is_empty() {
            return self.variant_name().to_string();
        }
        let body = fields
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {{ {} }}", self.variant_name(), body)
    }
}

impl_downcast!(Value);
dyn_clone::clone_trait_object!(Value);

impl dyn Value {
    /// Clone through the interface, producing the same concrete variant.
    pub fn clone_value(&self) -> Box<dyn Value> {
        dyn_clone::clone_box(self)
    }
}

/// Standard `compare` for variants with a `PartialEq` impl.
///
/// Downcasts `other` to `T` and compares field-wise; a different variant
/// yields `false`.
pub fn compare_fields<T>(this: &T, other: &dyn Value) -> bool
where
    T: Value + PartialEq,
{
    other.downcast_ref::<T>().is_some_and(|other| this == other)
}

impl PartialEq for dyn Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Marker;

    impl Value for Marker {
        fn variant_name(&self) -> &'static str {
            "Marker"
        }

        fn fields(&self) -> IndexMap<&'static str, String> {
            IndexMap::new()
        }

        fn compare(&self, other: &dyn Value) -> bool {
            compare_fields(self, other)
        }
    }

    #[test]
    fn test_render_without_fields_is_bare_name() {
        assert_eq!(Marker.render(), "Marker");
    }

    #[test]
    fn test_clone_value_keeps_variant() {
        let boxed: Box<dyn Value> = Box::new(Marker);
        let copy = boxed.clone_value();
        assert!(copy.is::<Marker>());
        assert!(!copy.is::<Playdoh>());
    }

    #[test]
    fn test_compare_fields_rejects_other_variant() {
        assert!(!compare_fields(&Marker, &Playdoh::new("red", 1)));
        assert!(compare_fields(&Marker, &Marker));
    }

    #[test]
    fn test_dyn_partial_eq() {
        let a: Box<dyn Value> = Box::new(Clay::new("grey", 3));
        let b: Box<dyn Value> = Box::new(Clay::new("grey", 3));
        let c: Box<dyn Value> = Box::new(Playdoh::new("grey", 3));
        assert!(*a == *b);
        assert!(*a != *c);
    }
}
