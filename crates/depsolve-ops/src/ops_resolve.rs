//! Operation: resolve one distribution against a dependency index.

use std::path::Path;

use depsolve_core::config::{GlobalConfig, VersionOrder};
use depsolve_resolver::report::TracingReporter;
use depsolve_resolver::version::VersionPolicy;
use depsolve_resolver::{Resolution, Resolver};
use depsolve_util::errors::DepsolveResult;
use depsolve_util::progress::{status, status_info, status_warn};

use crate::{load_index, parse_distkey};

/// Options for `depsolve resolve`.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Version trial order; `None` uses the configured order.
    pub order: Option<VersionOrder>,
    /// Print the trace as a Graphviz digraph.
    pub dot: bool,
    /// Print the trace as a dependency tree.
    pub tree: bool,
    /// Limit the tree to this many levels.
    pub depth: Option<usize>,
}

/// Resolve `root` and print the solution set.
pub fn resolve(
    index_path: &Path,
    root: &str,
    config: &GlobalConfig,
    opts: &ResolveOptions,
) -> DepsolveResult<Resolution> {
    let root = parse_distkey(root)?;
    let loaded = load_index(index_path, &[])?;

    let policy = VersionPolicy {
        order: opts.order.unwrap_or(config.resolve.version_order),
        prereleases: config.resolve.prereleases,
    };
    status("Resolving", &format!("{root} ({} order)", policy.order));

    let reporter = TracingReporter;
    let resolution = Resolver::new(&loaded.elaboration.deps, &loaded.catalog)
        .with_policy(policy)
        .with_reporter(&reporter)
        .resolve(&root)?;

    for dist in resolution.candidates.sorted() {
        println!("{dist}");
    }

    if !resolution.conflicts.is_empty() {
        status_info(
            "Backtracked",
            &format!("past {} rejected version(s)", resolution.conflicts.len()),
        );
        tracing::info!("{}", resolution.conflicts);
    }

    if opts.dot || opts.tree {
        if !config.trace.enabled {
            status_warn("Skipping", "trace output is disabled in the configuration");
        } else {
            if opts.dot {
                print!("{}", resolution.trace.to_dot());
            }
            if opts.tree {
                print!("{}", resolution.trace.to_graph().print_tree(opts.depth));
            }
        }
    }

    status(
        "Resolved",
        &format!("{root} with {} distribution(s)", resolution.candidates.len()),
    );
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depsolve_core::distkey::DistKey;

    fn write_index(dir: &tempfile::TempDir, json: serde_json::Value) -> std::path::PathBuf {
        let path = dir.path().join("index.json");
        std::fs::write(&path, json.to_string()).unwrap();
        path
    }

    #[test]
    fn resolves_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_index(
            &dir,
            serde_json::json!({
                "x(1)": [["b", ""], ["c", ""]],
                "b(2)": [],
                "b(1)": [],
                "c(1)": [["b", "<=1"]]
            }),
        );
        let resolution = resolve(
            &path,
            "x(1)",
            &GlobalConfig::default(),
            &ResolveOptions::default(),
        )
        .unwrap();
        assert!(resolution.candidates.contains(&DistKey::new("b", "1")));
        assert!(resolution.conflicts.contains(&DistKey::new("b", "2")));
    }

    #[test]
    fn order_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_index(
            &dir,
            serde_json::json!({ "x(1)": [["b", ""]], "b(9)": [], "b(10)": [] }),
        );
        let opts = ResolveOptions {
            order: Some(VersionOrder::Lexical),
            ..Default::default()
        };
        let resolution = resolve(&path, "x(1)", &GlobalConfig::default(), &opts).unwrap();
        assert!(resolution.candidates.contains(&DistKey::new("b", "9")));
    }

    #[test]
    fn bad_distkey_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_index(&dir, serde_json::json!({ "x(1)": [] }));
        let err = resolve(&path, "x1", &GlobalConfig::default(), &ResolveOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("Invalid distribution key"));
    }
}
