//! Operation: explain why a package is part of a resolution.

use std::path::Path;

use depsolve_core::config::GlobalConfig;
use depsolve_core::distkey::DistKey;
use depsolve_resolver::version::VersionPolicy;
use depsolve_resolver::Resolver;
use depsolve_util::errors::{DepsolveError, DepsolveResult};

use crate::{load_index, parse_distkey};

/// Resolve `root` and print the chain of distributions that pulled in
/// `package`, followed by everything in the resolution that depends on it.
pub fn why(
    index_path: &Path,
    root: &str,
    package: &str,
    config: &GlobalConfig,
) -> DepsolveResult<Vec<DistKey>> {
    let root = parse_distkey(root)?;
    let loaded = load_index(index_path, &[])?;

    let policy = VersionPolicy {
        order: config.resolve.version_order,
        prereleases: config.resolve.prereleases,
    };
    let resolution = Resolver::new(&loaded.elaboration.deps, &loaded.catalog)
        .with_policy(policy)
        .resolve(&root)?;
    let graph = resolution.trace.to_graph();

    let Some(path) = graph.find_path(package) else {
        return Err(DepsolveError::Generic {
            message: format!("'{package}' is not part of the resolution of {root}"),
        }
        .into());
    };

    println!("Path to {package}:");
    for (i, dist) in path.iter().enumerate() {
        let indent = "  ".repeat(i);
        println!("{indent}{dist}");
    }

    let inverted = graph.print_inverted_tree(package);
    if inverted.lines().count() > 1 {
        println!();
        println!("Depended on by:");
        print!("{inverted}");
    }

    Ok(path.into_iter().cloned().collect())
}
