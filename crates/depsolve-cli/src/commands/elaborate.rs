//! Handler for `depsolve elaborate`.

use std::path::Path;

use depsolve_ops::ops_elaborate;
use miette::Result;

pub fn exec(index: &Path) -> Result<()> {
    ops_elaborate::elaborate(index)?;
    Ok(())
}
