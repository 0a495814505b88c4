//! Turning raw dependency declarations into concrete catalog versions.

use std::collections::{BTreeMap, BTreeSet};

use depsolve_core::catalog::VersionCatalog;
use depsolve_core::dependency::DependencyIndex;
use depsolve_core::distkey::{normalize_package, DistKey};

use crate::error::{ElaborationError, ResolveError};
use crate::specifier::Specifier;

/// A dependency with its specifier resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElaboratedDependency {
    pub package: String,
    /// Catalog versions of `package` the specifier accepts, in catalog order.
    pub versions: Vec<String>,
    /// The specifier as declared, kept for error messages.
    pub specifier: String,
}

impl ElaboratedDependency {
    pub fn new(package: &str, versions: Vec<String>, specifier: &str) -> Self {
        Self {
            package: normalize_package(package),
            versions,
            specifier: specifier.to_string(),
        }
    }

    /// Whether `dist` is a distribution of this package with an accepted version.
    pub fn is_satisfied_by(&self, dist: &DistKey) -> bool {
        dist.is_package(&self.package) && self.versions.iter().any(|v| v == dist.version())
    }
}

/// Elaborated dependencies of every distribution that could be elaborated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElaboratedDeps {
    deps: BTreeMap<DistKey, Vec<ElaboratedDependency>>,
}

impl ElaboratedDeps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dist: DistKey, deps: Vec<ElaboratedDependency>) {
        self.deps.insert(dist, deps);
    }

    /// Elaborated dependencies of `dist`, in declaration order.
    pub fn dependencies_of(&self, dist: &DistKey) -> Result<&[ElaboratedDependency], ResolveError> {
        self.deps
            .get(dist)
            .map(Vec::as_slice)
            .ok_or_else(|| ResolveError::MissingDependencyInfo { dist: dist.clone() })
    }

    pub fn contains(&self, dist: &DistKey) -> bool {
        self.deps.contains_key(dist)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DistKey, &[ElaboratedDependency])> {
        self.deps.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }
}

impl FromIterator<(DistKey, Vec<ElaboratedDependency>)> for ElaboratedDeps {
    fn from_iter<I: IntoIterator<Item = (DistKey, Vec<ElaboratedDependency>)>>(iter: I) -> Self {
        Self {
            deps: iter.into_iter().collect(),
        }
    }
}

/// Result of elaborating a whole dependency index.
#[derive(Debug, Clone, Default)]
pub struct Elaboration {
    pub deps: ElaboratedDeps,
    /// Packages referenced by some declaration but absent from the catalog.
    pub packages_without_version_info: BTreeSet<String>,
    /// Distributions left out of `deps` because one of their declarations
    /// names a package without version information.
    pub dists_with_missing_dependencies: BTreeSet<DistKey>,
}

/// Elaborate every distribution in `index` against `catalog`.
///
/// Distributions that depend on an unknown package are recorded and skipped.
/// A malformed specifier fails the whole elaboration.
pub fn elaborate(
    index: &DependencyIndex,
    catalog: &VersionCatalog,
) -> Result<Elaboration, ElaborationError> {
    elaborate_with_baseline(index, catalog, &[])
}

/// Like [`elaborate`], but a declaration naming a `baseline` package that has
/// no version information is dropped instead of disqualifying its depender.
pub fn elaborate_with_baseline(
    index: &DependencyIndex,
    catalog: &VersionCatalog,
    baseline: &[String],
) -> Result<Elaboration, ElaborationError> {
    let mut result = Elaboration::default();

    'dists: for (dist, decls) in index.iter() {
        let mut elaborated = Vec::with_capacity(decls.len());
        for decl in decls {
            match elaborate_dependency(&decl.package, &decl.specifier, catalog) {
                Ok(dep) => elaborated.push(dep),
                Err(ElaborationError::UnknownPackage { package })
                    if baseline.iter().any(|b| b.eq_ignore_ascii_case(&package)) =>
                {
                    tracing::debug!("{dist}: ignoring baseline dependency {package}");
                }
                Err(ElaborationError::UnknownPackage { package }) => {
                    tracing::debug!("{dist} depends on {package}, which has no version information");
                    result.packages_without_version_info.insert(package);
                    result.dists_with_missing_dependencies.insert(dist.clone());
                    continue 'dists;
                }
                Err(e) => return Err(e),
            }
        }
        result.deps.insert(dist.clone(), elaborated);
    }

    tracing::debug!(
        "Elaborated {} distributions ({} skipped for missing dependencies)",
        result.deps.len(),
        result.dists_with_missing_dependencies.len()
    );
    Ok(result)
}

/// Resolve one declaration to the catalog versions it accepts.
pub fn elaborate_dependency(
    package: &str,
    specifier: &str,
    catalog: &VersionCatalog,
) -> Result<ElaboratedDependency, ElaborationError> {
    let versions = select_satisfying_versions(package, &[specifier], catalog)?;
    Ok(ElaboratedDependency::new(package, versions, specifier))
}

/// Catalog versions of `package` accepted by every one of `specifiers`.
pub fn select_satisfying_versions(
    package: &str,
    specifiers: &[&str],
    catalog: &VersionCatalog,
) -> Result<Vec<String>, ElaborationError> {
    let package = normalize_package(package);
    let available = catalog
        .versions_of(&package)
        .ok_or_else(|| ElaborationError::UnknownPackage {
            package: package.clone(),
        })?;

    let parsed = specifiers
        .iter()
        .map(|s| Specifier::parse(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ElaborationError::InvalidSpecifier {
            package: package.clone(),
            source,
        })?;

    Ok(available
        .iter()
        .filter(|v| parsed.iter().all(|s| s.contains(v)))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsolve_core::dependency::DependencyDecl;

    fn catalog() -> VersionCatalog {
        let mut catalog = VersionCatalog::new();
        for v in ["1", "2", "3", "4"] {
            catalog.insert("a", v);
        }
        catalog.insert("b", "1");
        catalog
    }

    #[test]
    fn select_by_range() {
        let versions = select_satisfying_versions("a", &[">=2,<4"], &catalog()).unwrap();
        assert_eq!(versions, vec!["2", "3"]);
    }

    #[test]
    fn select_intersects_specifiers() {
        let versions = select_satisfying_versions("A", &[">=2", "!=3"], &catalog()).unwrap();
        assert_eq!(versions, vec!["2", "4"]);
    }

    #[test]
    fn unknown_package_is_distinct_from_no_match() {
        let err = elaborate_dependency("zzz", "", &catalog()).unwrap_err();
        assert_eq!(
            err,
            ElaborationError::UnknownPackage {
                package: "zzz".into()
            }
        );

        let dep = elaborate_dependency("a", ">9", &catalog()).unwrap();
        assert!(dep.versions.is_empty());
        assert_eq!(dep.specifier, ">9");
    }

    #[test]
    fn invalid_specifier_is_reported_with_package() {
        let err = elaborate_dependency("a", "3", &catalog()).unwrap_err();
        assert!(matches!(err, ElaborationError::InvalidSpecifier { ref package, .. } if package == "a"));
    }

    #[test]
    fn satisfied_by_checks_package_and_version() {
        let dep = elaborate_dependency("a", "==3", &catalog()).unwrap();
        assert!(dep.is_satisfied_by(&DistKey::new("a", "3")));
        assert!(!dep.is_satisfied_by(&DistKey::new("a", "2")));
        assert!(!dep.is_satisfied_by(&DistKey::new("b", "3")));
    }

    #[test]
    fn elaborate_skips_dists_with_unknown_packages() {
        let mut index = DependencyIndex::new();
        index.insert(
            DistKey::new("x", "1"),
            vec![DependencyDecl::new("a", ""), DependencyDecl::new("ghost", "")],
        );
        index.insert(DistKey::new("y", "1"), vec![DependencyDecl::new("a", "==1")]);
        index.insert(DistKey::new("a", "1"), vec![]);

        let catalog = VersionCatalog::from_index(&index);
        let elaboration = elaborate(&index, &catalog).unwrap();

        assert!(elaboration.packages_without_version_info.contains("ghost"));
        assert!(elaboration
            .dists_with_missing_dependencies
            .contains(&DistKey::new("x", "1")));
        assert!(!elaboration.deps.contains(&DistKey::new("x", "1")));

        let y = elaboration.deps.dependencies_of(&DistKey::new("y", "1")).unwrap();
        assert_eq!(y[0].versions, vec!["1"]);
    }

    #[test]
    fn baseline_declarations_without_versions_are_dropped() {
        let mut index = DependencyIndex::new();
        index.insert(
            DistKey::new("c", "1"),
            vec![DependencyDecl::new("a", ""), DependencyDecl::new("Pip", ">=1.3")],
        );
        index.insert(DistKey::new("a", "1"), vec![]);
        let catalog = VersionCatalog::from_index(&index);

        let baseline = vec!["pip".to_string()];
        let elaboration = elaborate_with_baseline(&index, &catalog, &baseline).unwrap();
        assert!(elaboration.packages_without_version_info.is_empty());
        let c = elaboration.deps.dependencies_of(&DistKey::new("c", "1")).unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].package, "a");

        let strict = elaborate(&index, &catalog).unwrap();
        assert!(!strict.deps.contains(&DistKey::new("c", "1")));
    }

    #[test]
    fn missing_dependency_info_on_lookup() {
        let deps = ElaboratedDeps::new();
        let err = deps.dependencies_of(&DistKey::new("x", "1")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingDependencyInfo {
                dist: DistKey::new("x", "1")
            }
        );
    }
}
