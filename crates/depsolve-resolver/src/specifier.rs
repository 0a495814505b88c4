use std::cmp::Ordering;
use std::fmt;

use crate::error::SpecifierError;
use crate::version::Version;

/// A version specifier such as `>=1.4,<2.0,!=1.5.*`.
///
/// Clauses are comma-separated and all must hold. An empty specifier matches
/// every version.
#[derive(Debug, Clone, Default)]
pub struct Specifier {
    pub clauses: Vec<Clause>,
}

/// One `<operator><version>` comparison.
#[derive(Debug, Clone)]
pub struct Clause {
    pub op: Operator,
    pub version: String,
    /// Trailing `.*` on `==` / `!=`: compare release prefixes only.
    pub wildcard: bool,
    parsed: Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `===`, exact string match.
    Arbitrary,
    /// `~=`
    Compatible,
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
}

impl Operator {
    // Longest tokens first so `===` is not read as `==` followed by `=`.
    const TOKENS: [(&'static str, Operator); 8] = [
        ("===", Operator::Arbitrary),
        ("~=", Operator::Compatible),
        ("==", Operator::Equal),
        ("!=", Operator::NotEqual),
        ("<=", Operator::LessEqual),
        (">=", Operator::GreaterEqual),
        ("<", Operator::Less),
        (">", Operator::Greater),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Arbitrary => "===",
            Operator::Compatible => "~=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Less => "<",
            Operator::Greater => ">",
        }
    }
}

impl Specifier {
    /// Parse a comma-separated specifier string.
    ///
    /// Empty pieces (`">=1,,<2"`, `""`) are skipped.
    pub fn parse(spec: &str) -> Result<Self, SpecifierError> {
        let clauses = spec
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Clause::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses })
    }

    /// Whether this specifier accepts every version.
    pub fn is_any(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn contains(&self, version: &str) -> bool {
        let parsed = Version::parse(version);
        self.clauses.iter().all(|c| c.matches(version, &parsed))
    }

    /// The subset of `versions` this specifier accepts, in input order.
    pub fn filter<'a>(&self, versions: &'a [String]) -> Vec<&'a String> {
        versions.iter().filter(|v| self.contains(v)).collect()
    }
}

impl Clause {
    fn parse(piece: &str) -> Result<Self, SpecifierError> {
        let (op, rest) = Operator::TOKENS
            .iter()
            .find_map(|(token, op)| piece.strip_prefix(token).map(|rest| (*op, rest.trim())))
            .ok_or_else(|| SpecifierError::MissingOperator {
                clause: piece.to_string(),
            })?;

        if rest.is_empty() {
            return Err(SpecifierError::MissingVersion {
                clause: piece.to_string(),
            });
        }

        let (version, wildcard) = match rest.strip_suffix(".*") {
            Some(prefix) => (prefix, true),
            None => (rest, false),
        };
        let wildcard_allowed = matches!(op, Operator::Equal | Operator::NotEqual);
        if version.contains('*') || (wildcard && !wildcard_allowed) {
            return Err(SpecifierError::InvalidWildcard {
                clause: piece.to_string(),
            });
        }

        let parsed = Version::parse(version);
        if op == Operator::Compatible && parsed.release().len() < 2 {
            return Err(SpecifierError::CompatibleTooShort {
                clause: piece.to_string(),
            });
        }

        Ok(Self {
            op,
            version: version.to_string(),
            wildcard,
            parsed,
        })
    }

    fn matches(&self, raw: &str, version: &Version) -> bool {
        let ord = version.cmp(&self.parsed);
        match self.op {
            Operator::Arbitrary => raw.trim().eq_ignore_ascii_case(&self.version),
            Operator::Equal if self.wildcard => version.has_release_prefix(self.parsed.release()),
            Operator::NotEqual if self.wildcard => {
                !version.has_release_prefix(self.parsed.release())
            }
            Operator::Equal => ord == Ordering::Equal,
            Operator::NotEqual => ord != Ordering::Equal,
            Operator::LessEqual => ord != Ordering::Greater,
            Operator::GreaterEqual => ord != Ordering::Less,
            Operator::Less => ord == Ordering::Less,
            Operator::Greater => ord == Ordering::Greater,
            Operator::Compatible => {
                let release = self.parsed.release();
                let prefix = &release[..release.len() - 1];
                ord != Ordering::Less && version.has_release_prefix(prefix)
            }
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.as_str(), self.version)?;
        if self.wildcard {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}
