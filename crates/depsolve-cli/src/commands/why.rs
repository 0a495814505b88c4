//! Handler for `depsolve why`.

use std::path::Path;

use depsolve_core::config::GlobalConfig;
use depsolve_ops::ops_why;
use miette::Result;

pub fn exec(distkey: &str, package: &str, index: &Path, config: &GlobalConfig) -> Result<()> {
    ops_why::why(index, distkey, package, config)?;
    Ok(())
}
