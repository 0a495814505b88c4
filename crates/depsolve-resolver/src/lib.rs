//! Dependency resolution: version precedence, specifier matching,
//! elaboration, the backtracking search, and checks over its results.

pub mod cache;
pub mod conflict;
pub mod elaborate;
pub mod error;
pub mod graph;
pub mod report;
pub mod resolver;
pub mod specifier;
pub mod trace;
pub mod verify;
pub mod version;

pub use error::{ElaborationError, ResolveError, SpecifierError};
pub use resolver::{Resolution, Resolver};
