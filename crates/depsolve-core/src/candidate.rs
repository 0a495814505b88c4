use std::fmt;

use crate::distkey::{normalize_package, DistKey};

/// The distributions chosen so far along one search path.
///
/// Members keep the order in which they were chosen. Extending a set
/// produces a new set; the original is left untouched so that every level of
/// the search owns its own snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    members: Vec<DistKey>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this set with `dist` appended.
    pub fn with(&self, dist: DistKey) -> Self {
        let mut members = self.members.clone();
        members.push(dist);
        Self { members }
    }

    pub fn contains(&self, dist: &DistKey) -> bool {
        self.members.contains(dist)
    }

    /// The member distribution of `package`, if one was chosen.
    pub fn find_package(&self, package: &str) -> Option<&DistKey> {
        let package = normalize_package(package);
        self.members.iter().find(|d| d.package() == package)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistKey> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[DistKey] {
        &self.members
    }

    /// Members sorted by package name then version, for stable display.
    pub fn sorted(&self) -> Vec<DistKey> {
        let mut sorted = self.members.clone();
        sorted.sort();
        sorted
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl From<Vec<DistKey>> for CandidateSet {
    fn from(members: Vec<DistKey>) -> Self {
        Self { members }
    }
}

impl FromIterator<DistKey> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = DistKey>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a DistKey;
    type IntoIter = std::slice::Iter<'a, DistKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dist) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dist}")?;
        }
        write!(f, "]")
    }
}
