//! Diagnostics sink for one resolution call.

use depsolve_core::distkey::DistKey;

use crate::error::ResolveError;

/// Receives search events as the engine makes them.
///
/// Every method has an empty default so implementors only override the
/// events they care about. `depth` is the distance from the root
/// distribution of the obligation being worked on.
#[allow(unused_variables)]
pub trait Reporter {
    /// A distribution was chosen and its dependencies queued.
    fn visiting(&self, dist: &DistKey, depth: usize) {}

    fn no_dependencies(&self, dist: &DistKey, depth: usize) {}

    /// `depender`'s dependency on `package` is met by an earlier choice.
    fn satisfied_by_existing(&self, depender: &DistKey, existing: &DistKey, depth: usize) {}

    fn trying(&self, depender: &DistKey, candidate: &DistKey, depth: usize) {}

    fn rejected(&self, candidate: &DistKey, reason: &ResolveError, depth: usize) {}

    fn accepted(&self, candidate: &DistKey, depth: usize) {}

    /// Every version for `package` failed; control returns to an earlier choice.
    fn backtracking(&self, depender: &DistKey, package: &str, depth: usize) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpReporter;

impl Reporter for NoOpReporter {}

/// Emits events as depth-indented `tracing` debug records.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

impl Reporter for TracingReporter {
    fn visiting(&self, dist: &DistKey, depth: usize) {
        tracing::debug!("{}visiting {dist}", indent(depth));
    }

    fn no_dependencies(&self, dist: &DistKey, depth: usize) {
        tracing::debug!("{}{dist} has no dependencies", indent(depth));
    }

    fn satisfied_by_existing(&self, depender: &DistKey, existing: &DistKey, depth: usize) {
        tracing::debug!(
            "{}{depender}: already satisfied by {existing}",
            indent(depth)
        );
    }

    fn trying(&self, depender: &DistKey, candidate: &DistKey, depth: usize) {
        tracing::debug!("{}{depender}: trying {candidate}", indent(depth));
    }

    fn rejected(&self, candidate: &DistKey, reason: &ResolveError, depth: usize) {
        tracing::debug!("{}rejected {candidate}: {reason}", indent(depth));
    }

    fn accepted(&self, candidate: &DistKey, depth: usize) {
        tracing::debug!("{}accepted {candidate}", indent(depth));
    }

    fn backtracking(&self, depender: &DistKey, package: &str, depth: usize) {
        tracing::debug!(
            "{}{depender}: no version of {package} works, backtracking",
            indent(depth)
        );
    }
}
