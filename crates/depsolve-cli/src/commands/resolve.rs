//! Handler for `depsolve resolve`.

use std::path::Path;

use depsolve_core::config::{GlobalConfig, VersionOrder};
use depsolve_ops::ops_resolve::{self, ResolveOptions};
use miette::Result;

pub fn exec(
    distkey: &str,
    index: &Path,
    order: Option<VersionOrder>,
    dot: bool,
    tree: bool,
    depth: Option<u32>,
    config: &GlobalConfig,
) -> Result<()> {
    let opts = ResolveOptions {
        order,
        dot,
        tree,
        depth: depth.map(|d| d as usize),
    };
    ops_resolve::resolve(index, distkey, config, &opts)?;
    Ok(())
}
