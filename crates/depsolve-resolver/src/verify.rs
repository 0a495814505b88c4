//! Checks over finished solution sets, and the naive greedy walk used to
//! spot conflicts a non-backtracking installer would run into.

use depsolve_core::candidate::CandidateSet;
use depsolve_core::config::VersionOrder;
use depsolve_core::distkey::DistKey;

use crate::cache::VisitedSet;
use crate::conflict::{has_any_conflict, union_unique};
use crate::elaborate::ElaboratedDeps;
use crate::error::ResolveError;
use crate::version::order_versions;

/// Whether `candidates` is conflict-free and every dependency of every member
/// is met by another member.
///
/// Packages named in `baseline` are treated as already installed: members of
/// those packages are not checked and dependencies on them are ignored.
/// A member with no elaborated dependency data makes the answer unknown,
/// reported as `MissingDependencyInfo`.
pub fn are_fully_satisfied(
    candidates: &CandidateSet,
    elaborated: &ElaboratedDeps,
    baseline: &[String],
) -> Result<bool, ResolveError> {
    if has_any_conflict(candidates) {
        tracing::debug!("{candidates} holds two versions of one package");
        return Ok(false);
    }

    let in_baseline = |package: &str| baseline.iter().any(|b| b.eq_ignore_ascii_case(package));

    for member in candidates {
        if in_baseline(member.package()) {
            continue;
        }
        for dep in elaborated.dependencies_of(member)? {
            if in_baseline(&dep.package) {
                continue;
            }
            let met = candidates.iter().any(|c| dep.is_satisfied_by(c));
            if !met {
                tracing::debug!(
                    "{member}: dependency on {} '{}' is not met",
                    dep.package,
                    dep.specifier
                );
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Everything a non-backtracking installer would pick for `root`: for each
/// dependency, the most preferred satisfying version, recursively.
///
/// The result starts with `root`. Two dependents of one package may pick
/// different versions, in which case both appear.
pub fn greedy_candidates(
    root: &DistKey,
    elaborated: &ElaboratedDeps,
    order: VersionOrder,
) -> Result<CandidateSet, ResolveError> {
    let mut visited = VisitedSet::new();
    greedy_walk(root, elaborated, order, 0, &mut visited)
}

fn greedy_walk(
    dist: &DistKey,
    elaborated: &ElaboratedDeps,
    order: VersionOrder,
    depth: usize,
    visited: &mut VisitedSet,
) -> Result<CandidateSet, ResolveError> {
    let mut picked = CandidateSet::new().with(dist.clone());
    if !visited.visit(dist) {
        return Ok(picked);
    }

    for dep in elaborated.dependencies_of(dist)? {
        let Some(version) = order_versions(&dep.versions, order).into_iter().next() else {
            return Err(ResolveError::NoSatisfyingVersion {
                depender: dist.clone(),
                package: dep.package.clone(),
                specifier: dep.specifier.clone(),
                depth,
            });
        };
        let chosen = DistKey::new(&dep.package, &version);
        let below = greedy_walk(&chosen, elaborated, order, depth + 1, visited)?;
        picked = union_unique(&picked, &below);
    }

    Ok(picked)
}

/// Whether the greedy walk for `root` ends up with two versions of one package.
pub fn detect_greedy_conflict(
    root: &DistKey,
    elaborated: &ElaboratedDeps,
    order: VersionOrder,
) -> Result<bool, ResolveError> {
    let picked = greedy_candidates(root, elaborated, order)?;
    let conflict = has_any_conflict(&picked);
    if conflict {
        tracing::info!("Greedy selection for {root} conflicts: {picked}");
    }
    Ok(conflict)
}
