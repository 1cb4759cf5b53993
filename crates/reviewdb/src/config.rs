//! Store configuration.

/// Upper bound (exclusive) for generated game ids.
pub const DEFAULT_ID_UPPER_BOUND: u32 = 10_000;

/// Configuration for a [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// New game ids are drawn uniformly from `0..id_upper_bound`
    /// (default: 10 000). Collisions with existing ids are not checked.
    pub id_upper_bound: u32,

    /// Load the fixed seed data at construction (default: true)
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { id_upper_bound: DEFAULT_ID_UPPER_BOUND, seed: true }
    }
}

impl StoreConfig {
    /// Set the id upper bound.
    ///
    /// A bound of zero is raised to one so that id generation always has a
    /// non-empty range to draw from.
    #[must_use]
    pub fn id_upper_bound(mut self, bound: u32) -> Self {
        self.id_upper_bound = bound.max(1);
        self
    }

    /// Enable or disable the seed data.
    #[must_use]
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
}
