use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for depsolve operations outside the search itself.
#[derive(Debug, Error, Diagnostic)]
pub enum DepsolveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dependency index (bad JSON, bad distkey, bad declaration).
    #[error("Dependency index error: {message}")]
    #[diagnostic(help("Entries look like {{\"name(version)\": [[\"dep\", \">=1,<2\"]]}}"))]
    Index { message: String },

    /// Invalid or unreadable configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.depsolve/config.toml for syntax errors"))]
    Config { message: String },

    /// A distribution key could not be parsed.
    #[error("Invalid distribution key '{input}': expected name(version)")]
    DistKey { input: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepsolveResult<T> = miette::Result<T>;
