//! Core data types for depsolve.
//!
//! This crate defines the inputs and the working state of a resolution:
//! distribution keys, dependency declarations and the index that holds them,
//! the version catalog derived from that index, candidate sets, and the
//! global configuration.
//!
//! This crate is intentionally free of search logic and network I/O.

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod dependency;
pub mod distkey;
