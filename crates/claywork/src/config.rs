//! Container configuration

/// Sizing limits shared by both container kinds.
///
/// # Example
///
/// ```
/// use claywork::{ContainerConfig, OwningContainer, Playdoh};
///
/// let mut bag = OwningContainer::with_config(ContainerConfig::with_max_len(1));
/// bag.add(Playdoh::new("red", 10)).unwrap();
/// assert!(bag.add(Playdoh::new("blue", 5)).is_err());
/// assert_eq!(bag.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerConfig {
    /// Maximum number of entries (`None` for unbounded)
    pub max_len: Option<usize>,

    /// Slots to reserve up front
    pub initial_capacity: usize,
}

impl ContainerConfig {
    /// Create an unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a maximum length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Default::default()
        }
    }

    /// Set the number of slots reserved up front (builder pattern).
    pub fn reserve(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Check whether a container of length `len` may accept one more entry.
    pub fn admits(&self, len: usize) -> bool {
        self.max_len.map_or(true, |max| len < max)
    }
}
