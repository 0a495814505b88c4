//! Search outcomes and elaboration failures.

use depsolve_core::distkey::DistKey;
use miette::Diagnostic;
use thiserror::Error;

/// Why a distribution could not be satisfied.
///
/// The first three variants are ordinary search outcomes: the engine catches
/// them at the nearest choice point and tries the next version.
/// `MissingDependencyInfo` is never caught; it means satisfiability is
/// unknown rather than false.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    #[error(
        "Dependency of {depender} on {package} with specifier '{specifier}' cannot be satisfied: \
         no versions found"
    )]
    #[diagnostic(
        code(depsolve::no_satisfying_version),
        help("No catalog version of {package} matches '{specifier}'")
    )]
    NoSatisfyingVersion {
        depender: DistKey,
        package: String,
        specifier: String,
        depth: usize,
    },

    #[error(
        "Dependency of {depender} on {package} with specifier '{specifier}' conflicts with \
         {existing}, already chosen"
    )]
    #[diagnostic(code(depsolve::conflicting_version))]
    ConflictingVersion {
        depender: DistKey,
        package: String,
        specifier: String,
        existing: DistKey,
        depth: usize,
    },

    #[error(
        "Dependency of {depender} on {package} with specifier '{specifier}' cannot be satisfied: \
         {} version(s) tried, none without conflicts",
        .tried.len()
    )]
    #[diagnostic(code(depsolve::unresolvable_conflict))]
    UnresolvableConflict {
        depender: DistKey,
        package: String,
        specifier: String,
        tried: Vec<DistKey>,
        depth: usize,
        #[source]
        cause: Option<Box<ResolveError>>,
    },

    #[error("No dependency information for {dist}")]
    #[diagnostic(
        code(depsolve::missing_dependency_info),
        help("The distribution is absent from the elaborated dependencies; satisfiability is unknown")
    )]
    MissingDependencyInfo { dist: DistKey },
}

impl ResolveError {
    /// Whether the search recovers from this error by trying another version.
    pub fn is_backtrackable(&self) -> bool {
        !matches!(self, Self::MissingDependencyInfo { .. })
    }

    /// Short machine-friendly name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoSatisfyingVersion { .. } => "no-satisfying-version",
            Self::ConflictingVersion { .. } => "conflicting-version",
            Self::UnresolvableConflict { .. } => "unresolvable-conflict",
            Self::MissingDependencyInfo { .. } => "missing-dependency-info",
        }
    }
}

/// A specifier string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SpecifierError {
    #[error("Specifier clause '{clause}' has no comparison operator")]
    #[diagnostic(help("Use one of ==, !=, >=, <=, >, <, ~=, ==="))]
    MissingOperator { clause: String },

    #[error("Specifier clause '{clause}' has no version")]
    MissingVersion { clause: String },

    #[error("Wildcard in '{clause}' is only allowed with == and !=")]
    InvalidWildcard { clause: String },

    #[error("Compatible-release clause '{clause}' needs at least two release segments")]
    CompatibleTooShort { clause: String },
}

/// Failure to turn a dependency declaration into concrete versions.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ElaborationError {
    /// The dependency names a package with no catalog entry at all.
    #[error("No version information for package '{package}'")]
    UnknownPackage { package: String },

    #[error("Invalid specifier for {package}: {source}")]
    InvalidSpecifier {
        package: String,
        #[source]
        source: SpecifierError,
    },
}
