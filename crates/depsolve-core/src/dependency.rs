use std::collections::BTreeMap;
use std::path::Path;

use depsolve_util::errors::DepsolveError;
use serde::{Deserialize, Serialize};

use crate::distkey::{normalize_package, DistKey};

/// A declared dependency of one distribution on some versions of a package.
///
/// Serialized as a two-element list `["package", "specifier"]`, the layout
/// used by raw dependency dumps. An empty specifier means any version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct DependencyDecl {
    pub package: String,
    pub specifier: String,
}

impl DependencyDecl {
    pub fn new(package: &str, specifier: &str) -> Self {
        Self {
            package: normalize_package(package),
            specifier: specifier.trim().to_string(),
        }
    }
}

impl From<(String, String)> for DependencyDecl {
    fn from((package, specifier): (String, String)) -> Self {
        Self::new(&package, &specifier)
    }
}

impl From<DependencyDecl> for (String, String) {
    fn from(decl: DependencyDecl) -> Self {
        (decl.package, decl.specifier)
    }
}

impl std::fmt::Display for DependencyDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.specifier.is_empty() {
            write!(f, "{}", self.package)
        } else {
            write!(f, "{} {}", self.package, self.specifier)
        }
    }
}

/// Raw dependency declarations for every known distribution.
///
/// Distributions are kept sorted by key; each distribution's declarations
/// keep the order they were declared in, since the search visits them in
/// that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyIndex {
    dists: BTreeMap<DistKey, Vec<DependencyDecl>>,
}

impl DependencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an index from JSON of the form
    /// `{"x(1)": [["b", ""], ["c", ">=2"]], "b(1)": []}`.
    pub fn from_json_str(content: &str) -> miette::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            DepsolveError::Index {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load and parse a JSON dependency index from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepsolveError::Index {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let index = Self::from_json_str(&content)?;
        tracing::debug!(
            "Loaded {} distributions from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    /// Register a distribution and its declarations, replacing any previous entry.
    pub fn insert(&mut self, dist: DistKey, deps: Vec<DependencyDecl>) {
        self.dists.insert(dist, deps);
    }

    /// Declarations of `dist`, or `None` if the distribution is unknown.
    pub fn dependencies_of(&self, dist: &DistKey) -> Option<&[DependencyDecl]> {
        self.dists.get(dist).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DistKey, &[DependencyDecl])> {
        self.dists.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.dists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dists.is_empty()
    }
}

impl FromIterator<(DistKey, Vec<DependencyDecl>)> for DependencyIndex {
    fn from_iter<I: IntoIterator<Item = (DistKey, Vec<DependencyDecl>)>>(iter: I) -> Self {
        Self {
            dists: iter.into_iter().collect(),
        }
    }
}
