use std::collections::BTreeMap;

use crate::dependency::DependencyIndex;
use crate::distkey::{normalize_package, DistKey};

/// Every known version of every known package.
///
/// The catalog is read-only during a resolution. A package that is absent
/// from the catalog has no version information at all, which is distinct from
/// a package whose versions simply fail to match some constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionCatalog {
    versions: BTreeMap<String, Vec<String>>,
}

impl VersionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the catalog from the distributions present in a dependency index.
    pub fn from_index(index: &DependencyIndex) -> Self {
        let mut catalog = Self::new();
        for (dist, _) in index.iter() {
            catalog.insert_dist(dist);
        }
        catalog
    }

    /// Record `version` as an available version of `package`.
    pub fn insert(&mut self, package: &str, version: &str) {
        let versions = self
            .versions
            .entry(normalize_package(package))
            .or_default();
        if !versions.iter().any(|v| v == version) {
            versions.push(version.to_string());
        }
    }

    pub fn insert_dist(&mut self, dist: &DistKey) {
        self.insert(dist.package(), dist.version());
    }

    /// Known versions of `package`, or `None` if the package is unknown.
    pub fn versions_of(&self, package: &str) -> Option<&[String]> {
        self.versions
            .get(&normalize_package(package))
            .map(Vec::as_slice)
    }

    pub fn contains_package(&self, package: &str) -> bool {
        self.versions.contains_key(&normalize_package(package))
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Number of packages in the catalog.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
