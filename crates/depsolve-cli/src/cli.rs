//! CLI argument definitions for depsolve.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use depsolve_core::config::VersionOrder;

#[derive(Parser, Debug)]
#[command(
    name = "depsolve",
    version,
    about = "Resolve package dependencies to one consistent set of versions",
    long_about = "depsolve reads a JSON dependency index and finds, by backtracking search, \
                  a set of distributions in which every declared version constraint holds \
                  and no package appears twice."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (search events at debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use this configuration file instead of ~/.depsolve/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a distribution's dependencies
    Resolve {
        /// Distribution to resolve, e.g. "django(1.8.3)"
        distkey: String,
        /// JSON dependency index
        #[arg(long, env = "DEPSOLVE_INDEX", value_name = "FILE")]
        index: PathBuf,
        /// Version trial order: precedence or lexical
        #[arg(long)]
        order: Option<VersionOrder>,
        /// Print the resolution trace as a Graphviz digraph
        #[arg(long)]
        dot: bool,
        /// Print the resolution trace as a tree
        #[arg(long)]
        tree: bool,
        /// Maximum tree depth
        #[arg(long, requires = "tree")]
        depth: Option<u32>,
    },

    /// Check that a set of distributions is conflict-free and complete
    Verify {
        /// Distributions in the set
        #[arg(required = true)]
        distkeys: Vec<String>,
        /// JSON dependency index
        #[arg(long, env = "DEPSOLVE_INDEX", value_name = "FILE")]
        index: PathBuf,
    },

    /// Report packages and distributions with incomplete dependency data
    Elaborate {
        /// JSON dependency index
        #[arg(long, env = "DEPSOLVE_INDEX", value_name = "FILE")]
        index: PathBuf,
    },

    /// Explain why a package is part of a resolution
    Why {
        /// Distribution to resolve
        distkey: String,
        /// Package to explain
        package: String,
        /// JSON dependency index
        #[arg(long, env = "DEPSOLVE_INDEX", value_name = "FILE")]
        index: PathBuf,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
