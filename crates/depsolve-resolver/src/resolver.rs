//! Backtracking resolution engine.
//!
//! The search works through an agenda of open obligations, each being one
//! declared dependency of an already chosen distribution. Obligations are
//! taken depth-first in declaration order. One that is already met by a
//! chosen distribution is discharged without a choice. One that names an
//! unchosen package opens a choice point: its satisfying versions are tried
//! in policy order, and each trial continues the search with the rest of the
//! agenda. A failure anywhere later in the search unwinds to the most recent
//! choice point, so an early greedy pick is revisited when a sibling
//! dependency turns out to need a different version.
//!
//! All search state is passed by value. A trial works on its own copy of the
//! candidate set, conflict records and trace, so a failed trial leaves
//! nothing behind.

use depsolve_core::candidate::CandidateSet;
use depsolve_core::catalog::VersionCatalog;
use depsolve_core::distkey::DistKey;

use crate::conflict::ConflictRecords;
use crate::elaborate::{ElaboratedDependency, ElaboratedDeps};
use crate::error::ResolveError;
use crate::report::{NoOpReporter, Reporter};
use crate::trace::Trace;
use crate::version::VersionPolicy;

/// A successful resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Inherited distributions followed by every distribution chosen, in
    /// the order they were chosen.
    pub candidates: CandidateSet,
    /// Versions rejected at the choice points on the path to this result.
    pub conflicts: ConflictRecords,
    pub trace: Trace,
}

/// One declared dependency still to be satisfied.
#[derive(Clone)]
struct Obligation<'a> {
    depender: DistKey,
    dep: &'a ElaboratedDependency,
    /// Depth of `depender` below the root.
    depth: usize,
}

/// Pending obligations; the next one to handle is at the end.
type Agenda<'a> = Vec<Obligation<'a>>;

static NO_OP: NoOpReporter = NoOpReporter;

/// Resolves a distribution's transitive dependencies to one consistent set
/// of versions.
pub struct Resolver<'a> {
    deps: &'a ElaboratedDeps,
    catalog: &'a VersionCatalog,
    policy: VersionPolicy,
    reporter: &'a dyn Reporter,
}

impl<'a> Resolver<'a> {
    pub fn new(deps: &'a ElaboratedDeps, catalog: &'a VersionCatalog) -> Self {
        Self {
            deps,
            catalog,
            policy: VersionPolicy::default(),
            reporter: &NO_OP,
        }
    }

    pub fn with_policy(mut self, policy: VersionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_reporter(mut self, reporter: &'a dyn Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Resolve `root` from scratch.
    pub fn resolve(&self, root: &DistKey) -> Result<Resolution, ResolveError> {
        self.satisfy(root, &CandidateSet::new())
    }

    /// Resolve `target` on top of distributions that are already chosen.
    ///
    /// The result's candidate set starts with `inherited`, then `target`,
    /// then everything chosen for it. On failure nothing is returned but the
    /// error: no partial or inconsistent set ever escapes.
    ///
    /// # Panics
    ///
    /// Panics if `inherited` already holds a distribution of `target`'s
    /// package; callers must not ask for a second version of a package.
    pub fn satisfy(
        &self,
        target: &DistKey,
        inherited: &CandidateSet,
    ) -> Result<Resolution, ResolveError> {
        assert!(
            inherited.find_package(target.package()).is_none(),
            "{target} requested while {} is already chosen",
            inherited
                .find_package(target.package())
                .map(ToString::to_string)
                .unwrap_or_default()
        );

        let declared = self.deps.dependencies_of(target)?;

        let mut state = Resolution {
            candidates: inherited.with(target.clone()),
            conflicts: ConflictRecords::new(),
            trace: Trace::new(),
        };
        state.trace.node(target);
        self.reporter.visiting(target, 0);

        if declared.is_empty() {
            self.reporter.no_dependencies(target, 0);
            return Ok(state);
        }

        let mut agenda = Agenda::with_capacity(declared.len());
        push_obligations(&mut agenda, target, declared, 0);
        self.search(state, agenda)
    }

    fn search(
        &self,
        mut state: Resolution,
        mut agenda: Agenda<'a>,
    ) -> Result<Resolution, ResolveError> {
        while let Some(obligation) = agenda.pop() {
            let Obligation {
                depender,
                dep,
                depth,
            } = &obligation;

            let versions = self.available_versions(dep);
            if versions.is_empty() {
                return Err(ResolveError::NoSatisfyingVersion {
                    depender: depender.clone(),
                    package: dep.package.clone(),
                    specifier: dep.specifier.clone(),
                    depth: *depth,
                });
            }

            if let Some(existing) = state.candidates.find_package(&dep.package) {
                if !dep.is_satisfied_by(existing) {
                    return Err(ResolveError::ConflictingVersion {
                        depender: depender.clone(),
                        package: dep.package.clone(),
                        specifier: dep.specifier.clone(),
                        existing: existing.clone(),
                        depth: *depth,
                    });
                }
                let existing = existing.clone();
                self.reporter
                    .satisfied_by_existing(depender, &existing, *depth);
                state.trace.edge(depender, &existing);
                continue;
            }

            return self.choose(state, agenda, obligation, versions);
        }

        Ok(state)
    }

    /// Try each version of an unchosen package until the rest of the search
    /// succeeds with it.
    fn choose(
        &self,
        state: Resolution,
        agenda: Agenda<'a>,
        obligation: Obligation<'a>,
        versions: Vec<String>,
    ) -> Result<Resolution, ResolveError> {
        let Obligation {
            depender,
            dep,
            depth,
        } = obligation;

        let mut conflicts = state.conflicts.clone();
        let mut tried = Vec::new();
        let mut last_failure = None;

        for version in versions {
            let candidate = DistKey::new(&dep.package, &version);
            self.reporter.trying(&depender, &candidate, depth);

            let declared = self.deps.dependencies_of(&candidate)?;

            let mut next = Resolution {
                candidates: state.candidates.with(candidate.clone()),
                conflicts: conflicts.clone(),
                trace: state.trace.clone(),
            };
            next.trace.edge(&depender, &candidate);
            next.trace.node(&candidate);
            self.reporter.visiting(&candidate, depth + 1);
            if declared.is_empty() {
                self.reporter.no_dependencies(&candidate, depth + 1);
            }

            let mut next_agenda = agenda.clone();
            push_obligations(&mut next_agenda, &candidate, declared, depth + 1);

            match self.search(next, next_agenda) {
                Ok(resolution) => {
                    self.reporter.accepted(&candidate, depth);
                    return Ok(resolution);
                }
                Err(e) if e.is_backtrackable() => {
                    self.reporter.rejected(&candidate, &e, depth);
                    conflicts.insert(candidate.clone());
                    tried.push(candidate);
                    last_failure = Some(Box::new(e));
                }
                Err(e) => return Err(e),
            }
        }

        self.reporter.backtracking(&depender, &dep.package, depth);
        Err(ResolveError::UnresolvableConflict {
            depender,
            package: dep.package.clone(),
            specifier: dep.specifier.clone(),
            tried,
            depth,
            cause: last_failure,
        })
    }

    /// Satisfying versions still present in the catalog, most preferred first.
    fn available_versions(&self, dep: &ElaboratedDependency) -> Vec<String> {
        let Some(known) = self.catalog.versions_of(&dep.package) else {
            return Vec::new();
        };
        let versions: Vec<String> = dep
            .versions
            .iter()
            .filter(|v| known.contains(v))
            .cloned()
            .collect();
        self.policy.order(&versions)
    }
}

/// Queue `declared` so that the first declaration is handled next.
fn push_obligations<'a>(
    agenda: &mut Agenda<'a>,
    depender: &DistKey,
    declared: &'a [ElaboratedDependency],
    depth: usize,
) {
    agenda.extend(declared.iter().rev().map(|dep| Obligation {
        depender: depender.clone(),
        dep,
        depth,
    }));
}
