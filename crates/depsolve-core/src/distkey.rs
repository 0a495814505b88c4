use std::fmt;
use std::str::FromStr;

use depsolve_util::errors::DepsolveError;
use serde::{Deserialize, Serialize};

/// Identity of one installable distribution: a package name and a version.
///
/// Package names are case-insensitive and stored lowercased; the version is
/// an opaque token compared exactly. The textual form is `name(version)`,
/// e.g. `django(1.8.3)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistKey {
    package: String,
    version: String,
}

impl DistKey {
    pub fn new(package: &str, version: &str) -> Self {
        Self {
            package: normalize_package(package),
            version: version.trim().to_string(),
        }
    }

    /// Parse `"name(version)"` into a distribution key.
    pub fn parse(s: &str) -> Result<Self, DepsolveError> {
        let invalid = || DepsolveError::DistKey {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let inner = trimmed.strip_suffix(')').ok_or_else(invalid)?;
        let (package, version) = inner.split_once('(').ok_or_else(invalid)?;
        let package = package.trim();
        let version = version.trim();
        if package.is_empty() || version.is_empty() || version.contains('(') {
            return Err(invalid());
        }
        Ok(Self::new(package, version))
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Whether both keys name the same package, regardless of version.
    pub fn same_package(&self, other: &DistKey) -> bool {
        self.package == other.package
    }

    /// Whether this key is a distribution of `package`.
    pub fn is_package(&self, package: &str) -> bool {
        self.package == normalize_package(package)
    }
}

/// Lowercase a package name so lookups are case-insensitive.
pub fn normalize_package(package: &str) -> String {
    package.trim().to_lowercase()
}

impl fmt::Display for DistKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.package, self.version)
    }
}

impl FromStr for DistKey {
    type Err = DepsolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DistKey {
    type Error = DepsolveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DistKey> for String {
    fn from(key: DistKey) -> Self {
        key.to_string()
    }
}
