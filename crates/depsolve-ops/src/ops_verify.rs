//! Operation: check whether a given set of distributions is a consistent,
//! complete installation.

use std::fmt;
use std::path::Path;

use depsolve_core::candidate::CandidateSet;
use depsolve_core::distkey::DistKey;
use depsolve_resolver::conflict::find_conflicts;
use depsolve_resolver::verify::are_fully_satisfied;
use depsolve_resolver::ResolveError;
use depsolve_util::errors::DepsolveResult;
use depsolve_util::progress::status_warn;

use crate::{load_index, parse_distkey};

/// Outcome of a full-satisfaction check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Satisfied,
    Unsatisfied,
    /// Some member has no dependency data, so the answer is not known.
    Unknown(DistKey),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Satisfied => f.write_str("satisfied"),
            Verdict::Unsatisfied => f.write_str("unsatisfied"),
            Verdict::Unknown(dist) => write!(f, "unknown (no dependency information for {dist})"),
        }
    }
}

/// Check `dists` as a solution set and print the verdict.
pub fn verify(index_path: &Path, dists: &[String], baseline: &[String]) -> DepsolveResult<Verdict> {
    let candidates = dists
        .iter()
        .map(|d| parse_distkey(d))
        .collect::<DepsolveResult<CandidateSet>>()?;
    let loaded = load_index(index_path, baseline)?;

    for conflict in find_conflicts(&candidates) {
        status_warn("Conflict", &conflict.to_string());
    }

    let verdict = match are_fully_satisfied(&candidates, &loaded.elaboration.deps, baseline) {
        Ok(true) => Verdict::Satisfied,
        Ok(false) => Verdict::Unsatisfied,
        Err(ResolveError::MissingDependencyInfo { dist }) => {
            match loaded.index.dependencies_of(&dist) {
                None => status_warn("Unknown", &format!("{dist} is not in the index")),
                Some(decls) => {
                    let missing: Vec<&str> = decls
                        .iter()
                        .map(|d| d.package.as_str())
                        .filter(|p| loaded.catalog.versions_of(p).is_none())
                        .collect();
                    status_warn(
                        "Unknown",
                        &format!("{dist} depends on {}, which has no version information", missing.join(", ")),
                    );
                }
            }
            Verdict::Unknown(dist)
        }
        Err(e) => return Err(e.into()),
    };

    println!("{verdict}");
    Ok(verdict)
}
