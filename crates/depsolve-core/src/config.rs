use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use depsolve_util::errors::DepsolveError;

/// Global user configuration loaded from `~/.depsolve/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub verify: VerifyConfig,

    #[serde(default)]
    pub trace: TraceConfig,
}

/// Search settings from `[resolve]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default, rename = "version-order")]
    pub version_order: VersionOrder,
    /// Whether pre-release versions are tried at all when a stable version
    /// also satisfies the constraint.
    #[serde(default = "default_true")]
    pub prereleases: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            version_order: VersionOrder::default(),
            prereleases: true,
        }
    }
}

/// Full-satisfaction check settings from `[verify]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Packages assumed to be present already (e.g. shipped with a fresh
    /// environment); their dependencies are not checked.
    #[serde(default = "default_baseline")]
    pub baseline: Vec<String>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
        }
    }
}

fn default_baseline() -> Vec<String> {
    vec!["pip".into(), "setuptools".into(), "wheel".into()]
}

/// Trace output settings from `[trace]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Order in which the versions satisfying a constraint are tried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionOrder {
    /// Newest stable release first, then pre-releases, by version precedence.
    #[default]
    Precedence,
    /// Reverse lexical order of the raw version strings.
    Lexical,
}

impl FromStr for VersionOrder {
    type Err = DepsolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "precedence" => Ok(Self::Precedence),
            "lexical" => Ok(Self::Lexical),
            other => Err(DepsolveError::Config {
                message: format!("Unknown version order '{other}' (expected precedence or lexical)"),
            }),
        }
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precedence => f.write_str("precedence"),
            Self::Lexical => f.write_str("lexical"),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.depsolve/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if path.is_file() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DepsolveError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            DepsolveError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the depsolve data directory (`~/.depsolve/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".depsolve")
}
