//! Shared utilities for depsolve.
//!
//! This crate provides the cross-cutting concerns used by the other depsolve
//! crates: the unified error type and Cargo-style terminal status lines.

pub mod errors;
pub mod progress;
