//! Visited tracking for walks that may meet dependency cycles.

use std::collections::HashSet;

use depsolve_core::distkey::DistKey;

/// Tracks which distributions have been expanded during a walk
/// to prevent infinite loops in circular dependency chains.
#[derive(Debug, Default)]
pub struct VisitedSet {
    visited: HashSet<DistKey>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a distribution as visited. Returns `false` if already visited.
    pub fn visit(&mut self, dist: &DistKey) -> bool {
        self.visited.insert(dist.clone())
    }

    pub fn contains(&self, dist: &DistKey) -> bool {
        self.visited.contains(dist)
    }
}
