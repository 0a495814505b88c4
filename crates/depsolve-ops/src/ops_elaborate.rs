//! Operation: report what elaborating a dependency index left out.

use std::path::Path;

use depsolve_resolver::elaborate::Elaboration;
use depsolve_util::errors::DepsolveResult;
use depsolve_util::progress::{status, status_warn};

use crate::load_index;

/// Elaborate the index and print a summary of gaps in its data.
pub fn elaborate(index_path: &Path) -> DepsolveResult<Elaboration> {
    let loaded = load_index(index_path, &[])?;
    let elaboration = loaded.elaboration;

    status(
        "Elaborated",
        &format!(
            "{} of {} distributions across {} packages",
            elaboration.deps.len(),
            loaded.index.len(),
            loaded.catalog.len()
        ),
    );

    if elaboration.packages_without_version_info.is_empty() {
        println!("All referenced packages have version information.");
    } else {
        status_warn(
            "Missing",
            &format!(
                "{} package(s) without version information",
                elaboration.packages_without_version_info.len()
            ),
        );
        println!("Packages without version information:");
        for package in &elaboration.packages_without_version_info {
            println!("  {package}");
        }
        println!("Distributions with missing dependencies:");
        for dist in &elaboration.dists_with_missing_dependencies {
            println!("  {dist}");
        }
    }

    Ok(elaboration)
}
