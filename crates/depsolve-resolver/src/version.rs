//! Version parsing, precedence ordering, and trial order.
//!
//! Version strings are split into segments on `.`, `-`, `_` and on every
//! boundary between digits and letters, so `1.0.0alpha`, `2.0b` and `1.0rc1`
//! all parse. Comparison works segment by segment:
//! - numeric segments compare as numbers; zeros at the end of a numeric run
//!   are dropped, so `1.0 == 1.0.0` and `1.0a1 == 1.0.0a1`
//! - well-known qualifiers have a fixed ordering:
//!   `dev` < `alpha` < `beta` < `milestone` < `rc` < release < `post`
//! - explicit release markers (`final`, `ga`) are dropped, so `1.final == 1`
//! - any other word sorts below a release and below every number
//!
//! After normalization a version is compared as a sequence padded with an
//! end marker. Per position the ranking is
//! pre-release qualifier < word < end < `post` < number, which makes the
//! comparison a total order.
//! - an optional `N!` epoch prefix dominates, and a `+local` suffix only
//!   breaks ties

use std::cmp::Ordering;
use std::fmt;

use depsolve_core::config::VersionOrder;

/// A parsed version with comparable segments.
#[derive(Debug, Clone)]
pub struct Version {
    pub original: String,
    epoch: u64,
    segments: Vec<Segment>,
    release: Vec<u64>,
    local: Option<String>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Dev,
    Alpha,
    Beta,
    Milestone,
    Rc,
    Release,
    Post,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        let trimmed = version.trim();
        let (public, local) = match trimmed.split_once('+') {
            Some((public, local)) => (public, Some(local.to_lowercase())),
            None => (trimmed, None),
        };
        let (epoch, public) = match public.split_once('!') {
            Some((epoch, rest)) => match epoch.parse::<u64>() {
                Ok(n) => (n, rest),
                Err(_) => (0, public),
            },
            None => (0, public),
        };
        let public = match public.strip_prefix(['v', 'V']) {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
            _ => public,
        };
        let raw = parse_segments(public);
        let release = raw
            .iter()
            .map_while(|s| match s {
                Segment::Numeric(n) => Some(*n),
                _ => None,
            })
            .collect();
        Self {
            original: version.to_string(),
            epoch,
            segments: normalize(raw),
            release,
            local,
        }
    }

    /// Whether this is a development or pre-release version (`1.0a1`,
    /// `2.0b`, `1.0rc1`, `1.0.dev3`).
    pub fn is_prerelease(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Qualifier(q) if *q < QualifierKind::Release))
    }

    /// The leading run of numeric segments as written, e.g. `[1, 4, 2]` for
    /// `1.4.2rc1` and `[1, 4, 0]` for `1.4.0`.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// Whether the release segments start with `prefix`, padding with zeros.
    pub fn has_release_prefix(&self, prefix: &[u64]) -> bool {
        let release = &self.release;
        prefix
            .iter()
            .enumerate()
            .all(|(i, p)| release.get(i).copied().unwrap_or(0) == *p)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let ord = self.epoch.cmp(&other.epoch);
        if ord != Ordering::Equal {
            return ord;
        }
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let a = self.segments.get(i);
            let b = other.segments.get(i);
            let ord = compare_segments(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.local.cmp(&other.local)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
        (Segment::Numeric(_), Segment::Qualifier(_)) => Ordering::Greater,
        (Segment::Qualifier(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Numeric(_), Segment::Text(_)) => Ordering::Greater,
        (Segment::Text(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        (Segment::Qualifier(q), Segment::Text(_)) => {
            if *q >= QualifierKind::Release {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Qualifier(q)) => {
            if *q >= QualifierKind::Release {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

fn parse_segments(version: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in version.chars() {
        if ch == '.' || ch == '-' || ch == '_' {
            if !current.is_empty() {
                segments.push(classify(&current));
                current.clear();
            }
            continue;
        }
        let boundary = current
            .chars()
            .last()
            .is_some_and(|last| last.is_ascii_digit() != ch.is_ascii_digit());
        if boundary {
            segments.push(classify(&current));
            current.clear();
        }
        current.push(ch);
    }
    if !current.is_empty() {
        segments.push(classify(&current));
    }

    segments
}

/// Drop release markers and the zeros that close each numeric run.
fn normalize(raw: Vec<Segment>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(raw.len());
    let mut run_start = 0;
    for seg in raw {
        match seg {
            Segment::Numeric(_) => segments.push(seg),
            Segment::Qualifier(QualifierKind::Release) => {}
            other => {
                trim_run(&mut segments, run_start);
                segments.push(other);
                run_start = segments.len();
            }
        }
    }
    trim_run(&mut segments, run_start);
    segments
}

fn trim_run(segments: &mut Vec<Segment>, run_start: usize) {
    while segments.len() > run_start && segments.last() == Some(&Segment::Numeric(0)) {
        segments.pop();
    }
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token.to_lowercase().as_str() {
        "dev" => Segment::Qualifier(QualifierKind::Dev),
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "milestone" | "m" => Segment::Qualifier(QualifierKind::Milestone),
        "rc" | "c" | "cr" | "pre" | "preview" => Segment::Qualifier(QualifierKind::Rc),
        "ga" | "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "post" | "rev" | "r" | "sp" => Segment::Qualifier(QualifierKind::Post),
        other => Segment::Text(other.to_string()),
    }
}

/// How the versions satisfying one dependency are ordered for trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPolicy {
    pub order: VersionOrder,
    /// When false, pre-releases are dropped whenever a stable version is
    /// also available.
    pub prereleases: bool,
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self {
            order: VersionOrder::Precedence,
            prereleases: true,
        }
    }
}

impl VersionPolicy {
    pub fn new(order: VersionOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Order `versions` from most to least preferred.
    pub fn order(&self, versions: &[String]) -> Vec<String> {
        let ordered = order_versions(versions, self.order);
        if self.prereleases {
            return ordered;
        }
        let (stable, pre): (Vec<String>, Vec<String>) = ordered
            .into_iter()
            .partition(|v| !Version::parse(v).is_prerelease());
        if stable.is_empty() {
            pre
        } else {
            stable
        }
    }
}

/// Order `versions` from most to least preferred for installation.
///
/// `Precedence` puts stable releases first, newest first, followed by
/// pre-releases, newest first. Versions of equal precedence (`1.0` and
/// `1.0.0`) fall back to descending string order so the result is the same on
/// every call. `Lexical` is plain descending string order.
pub fn order_versions(versions: &[String], order: VersionOrder) -> Vec<String> {
    match order {
        VersionOrder::Lexical => {
            let mut sorted = versions.to_vec();
            sorted.sort_by(|a, b| b.cmp(a));
            sorted
        }
        VersionOrder::Precedence => {
            let mut parsed: Vec<Version> = versions.iter().map(|v| Version::parse(v)).collect();
            parsed.sort_by(|a, b| {
                a.is_prerelease()
                    .cmp(&b.is_prerelease())
                    .then_with(|| b.cmp(a))
                    .then_with(|| b.original.cmp(&a.original))
            });
            parsed.into_iter().map(|v| v.original).collect()
        }
    }
}
