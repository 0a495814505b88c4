//! Conflict detection over candidate sets and per-branch conflict records.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use depsolve_core::candidate::CandidateSet;
use depsolve_core::distkey::{normalize_package, DistKey};

/// Members of `set` that are distributions of `package`.
pub fn find_matching(package: &str, set: &CandidateSet) -> Vec<DistKey> {
    let package = normalize_package(package);
    set.iter()
        .filter(|d| d.package() == package)
        .cloned()
        .collect()
}

/// Members of `set` with the same package as `dist` but a different version.
pub fn conflicts_with(dist: &DistKey, set: &CandidateSet) -> Vec<DistKey> {
    set.iter()
        .filter(|d| d.same_package(dist) && d.version() != dist.version())
        .cloned()
        .collect()
}

/// Whether any package appears in `set` with two different versions.
pub fn has_any_conflict(set: &CandidateSet) -> bool {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for dist in set {
        match seen.insert(dist.package(), dist.version()) {
            Some(previous) if previous != dist.version() => return true,
            _ => {}
        }
    }
    false
}

/// Every package with more than one version in `set`.
pub fn find_conflicts(set: &CandidateSet) -> Vec<PackageConflict> {
    let mut by_package: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for dist in set {
        by_package
            .entry(dist.package())
            .or_default()
            .insert(dist.version());
    }
    by_package
        .into_iter()
        .filter(|(_, versions)| versions.len() > 1)
        .map(|(package, versions)| PackageConflict {
            package: package.to_string(),
            versions: versions.into_iter().map(String::from).collect(),
        })
        .collect()
}

/// `a` followed by the members of `b` not already in `a`.
///
/// No conflict checking is done; the result may hold two versions of one
/// package.
pub fn union_unique(a: &CandidateSet, b: &CandidateSet) -> CandidateSet {
    let mut members = a.as_slice().to_vec();
    for dist in b {
        if !members.contains(dist) {
            members.push(dist.clone());
        }
    }
    CandidateSet::from(members)
}

/// A package present in a candidate set with several versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConflict {
    pub package: String,
    pub versions: Vec<String>,
}

impl fmt::Display for PackageConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.package, self.versions.join(", "))
    }
}

/// Distributions found incompatible within the current branch.
///
/// A record only prunes retries below the choice point that made it; it is
/// never shared between top-level resolutions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictRecords {
    dists: BTreeSet<DistKey>,
}

impl ConflictRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `dist`. Returns `false` if it was already recorded.
    pub fn insert(&mut self, dist: DistKey) -> bool {
        self.dists.insert(dist)
    }

    pub fn contains(&self, dist: &DistKey) -> bool {
        self.dists.contains(dist)
    }

    pub fn merge(&mut self, other: &ConflictRecords) {
        self.dists.extend(other.dists.iter().cloned());
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistKey> {
        self.dists.iter()
    }

    pub fn len(&self) -> usize {
        self.dists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dists.is_empty()
    }
}

impl fmt::Display for ConflictRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dists.is_empty() {
            return write!(f, "No conflicts recorded.");
        }
        writeln!(f, "Rejected distributions ({}):", self.dists.len())?;
        for dist in &self.dists {
            writeln!(f, "  {dist}")?;
        }
        Ok(())
    }
}
