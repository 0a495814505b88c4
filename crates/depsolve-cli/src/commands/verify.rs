//! Handler for `depsolve verify`.

use std::path::Path;

use depsolve_core::config::GlobalConfig;
use depsolve_ops::ops_verify::{self, Verdict};
use depsolve_util::errors::DepsolveError;
use miette::Result;

pub fn exec(distkeys: &[String], index: &Path, config: &GlobalConfig) -> Result<()> {
    match ops_verify::verify(index, distkeys, &config.verify.baseline)? {
        Verdict::Satisfied => Ok(()),
        Verdict::Unsatisfied => Err(DepsolveError::Generic {
            message: "The set is not fully satisfied".to_string(),
        }
        .into()),
        Verdict::Unknown(dist) => Err(DepsolveError::Generic {
            message: format!("Satisfaction unknown: no dependency information for {dist}"),
        }
        .into()),
    }
}
