//! Tableau configuration.

/// Configuration for a [`Tableau`](crate::Tableau).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableauConfig {
    /// Re-check the row/watch invariants after every mutation.
    /// Defaults to on in debug builds and off in release builds.
    pub verify_invariants: bool,
    /// Number of variables to reserve space for up front.
    pub var_capacity: usize,
}

impl Default for TableauConfig {
    fn default() -> Self {
        Self {
            verify_invariants: cfg!(debug_assertions),
            var_capacity: 0,
        }
    }
}

impl TableauConfig {
    /// Sets whether invariants are verified after every mutation.
    #[must_use]
    pub fn with_verify_invariants(mut self, verify: bool) -> Self {
        self.verify_invariants = verify;
        self
    }

    /// Sets the number of variables to reserve space for.
    #[must_use]
    pub fn with_var_capacity(mut self, capacity: usize) -> Self {
        self.var_capacity = capacity;
        self
    }
}
