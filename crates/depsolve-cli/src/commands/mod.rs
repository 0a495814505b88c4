//! Command dispatch and handler modules.

mod elaborate;
mod resolve;
mod verify;
mod why;

use std::path::Path;

use depsolve_core::config::GlobalConfig;
use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Resolve {
            distkey,
            index,
            order,
            dot,
            tree,
            depth,
        } => resolve::exec(&distkey, &index, order, dot, tree, depth, &config),
        Command::Verify { distkeys, index } => verify::exec(&distkeys, &index, &config),
        Command::Elaborate { index } => elaborate::exec(&index),
        Command::Why {
            distkey,
            package,
            index,
        } => why::exec(&distkey, &package, &index, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<GlobalConfig> {
    let config = match path {
        Some(path) => GlobalConfig::load_from(path)?,
        None => GlobalConfig::load()?,
    };
    tracing::debug!("Using {config:?}");
    Ok(config)
}
