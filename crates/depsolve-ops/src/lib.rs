pub mod ops_elaborate;
pub mod ops_resolve;
pub mod ops_verify;
pub mod ops_why;

use std::path::Path;

use depsolve_core::catalog::VersionCatalog;
use depsolve_core::dependency::DependencyIndex;
use depsolve_core::distkey::DistKey;
use depsolve_resolver::elaborate::{elaborate_with_baseline, Elaboration};
use depsolve_util::errors::DepsolveResult;

/// A dependency index together with its catalog and elaboration.
pub struct LoadedIndex {
    pub index: DependencyIndex,
    pub catalog: VersionCatalog,
    pub elaboration: Elaboration,
}

/// Read a JSON dependency index and elaborate it against its own catalog.
///
/// Declarations on `baseline` packages with no version information are
/// ignored rather than disqualifying the distribution that makes them.
pub fn load_index(path: &Path, baseline: &[String]) -> DepsolveResult<LoadedIndex> {
    let index = DependencyIndex::from_path(path)?;
    let catalog = VersionCatalog::from_index(&index);
    let elaboration = elaborate_with_baseline(&index, &catalog, baseline)?;
    Ok(LoadedIndex {
        index,
        catalog,
        elaboration,
    })
}

/// Parse a `name(version)` argument.
pub fn parse_distkey(input: &str) -> DepsolveResult<DistKey> {
    Ok(DistKey::parse(input)?)
}
