use std::collections::HashSet;

use crate::ResolvedSet;

/// Names already reached during one resolution run. Grows only; `insert` is
/// the single gate against processing a package twice.
#[derive(Debug, Default)]
pub struct VisitedSet {
    names: HashSet<String>,
}

impl VisitedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn into_resolved(self) -> ResolvedSet {
        self.names
    }
}
