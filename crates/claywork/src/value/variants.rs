//! Built-in value variants

use indexmap::IndexMap;

use super::{compare_fields, Value};

/// A lump of play dough.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Playdoh {
    /// Dough color
    pub color: String,

    /// Weight in grams
    pub weight: u32,
}

impl Playdoh {
    /// Create a new lump
    pub fn new(color: impl Into<String>, weight: u32) -> Self {
        Self {
            color: color.into(),
            weight,
        }
    }

    /// Replace the color (builder pattern)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Replace the weight (builder pattern)
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

impl Value for Playdoh {
    fn variant_name(&self) -> &'static str {
        "Playdoh"
    }

    fn fields(&self) -> IndexMap<&'static str, String> {
        let mut fields = IndexMap::new();
        fields.insert("color", format!("{:?}", self.color));
        fields.insert("weight", self.weight.to_string());
        fields
    }

    fn compare(&self, other: &dyn Value) -> bool {
        compare_fields(self, other)
    }
}

/// A block of modelling clay.
///
/// Deliberately has the same field layout as [`Playdoh`]; the two are
/// still never equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clay {
    /// Clay color
    pub color: String,

    /// Weight in grams
    pub weight: u32,
}

impl Clay {
    /// Create a new block
    pub fn new(color: impl Into<String>, weight: u32) -> Self {
        Self {
            color: color.into(),
            weight,
        }
    }

    /// Replace the color (builder pattern)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Replace the weight (builder pattern)
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

impl Value for Clay {
    fn variant_name(&self) -> &'static str {
        "Clay"
    }

    fn fields(&self) -> IndexMap<&'static str, String> {
        let mut fields = IndexMap::new();
        fields.insert("color", format!("{:?}", self.color));
        fields.insert("weight", self.weight.to_string());
        fields
    }

    fn compare(&self, other: &dyn Value) -> bool {
        compare_fields(self, other)
    }
}
