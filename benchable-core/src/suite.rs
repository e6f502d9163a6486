//! Suite Registry
//!
//! A `Suite` is the blueprint a run instance is built from: one optional
//! setup routine plus an ordered mapping from case identifier to case body.
//! Authors populate it once; every run sees the same registrations.
//!
//! Registration is last-write-wins. The setup slot is singular, so a second
//! `setup` call replaces the first. Case names normalize to identifiers
//! before storage, so two names that collide on the same identifier leave a
//! single registered case: the later body, at the original position. This
//! mirrors declarative registration semantics and is deliberate; see
//! [`case_identifier`] for the lossy normalization involved.

use crate::name::{case_identifier, CASE_PREFIX};
use fxhash::FxHashMap;
use tracing::trace;

/// A registered case body: a zero-argument unit of work, run by a backend.
///
/// Bodies that produce a value should `std::hint::black_box` it themselves
/// to keep the optimizer honest.
pub type CaseBody = Box<dyn FnMut()>;

struct Case {
    identifier: String,
    body: CaseBody,
}

/// The declarative blueprint of a benchmark suite.
pub struct Suite {
    name: String,
    setup: Option<CaseBody>,
    cases: Vec<Case>,
    index: FxHashMap<String, usize>,
}

impl Suite {
    /// Create an empty suite blueprint.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            setup: None,
            cases: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// The suite's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the setup routine, replacing any previous registration.
    ///
    /// The routine runs exactly once per run, before any case.
    pub fn setup(&mut self, routine: impl FnMut() + 'static) -> &mut Self {
        self.setup = Some(Box::new(routine));
        self
    }

    /// Register a case under a free-form name.
    ///
    /// The name is normalized to an identifier before storage. Declaring a
    /// name whose identifier is already registered replaces that case's
    /// body in place (position kept); a new identifier appends. No error is
    /// raised for collisions; callers who need distinct cases must pick
    /// names that normalize to distinct identifiers.
    pub fn bench(&mut self, name: &str, body: impl FnMut() + 'static) -> &mut Self {
        let identifier = case_identifier(name);
        match self.index.get(&identifier).copied() {
            Some(position) => {
                trace!(identifier = identifier.as_str(), position, "replacing benchmark case");
                self.cases[position].body = Box::new(body);
            }
            None => {
                trace!(identifier = identifier.as_str(), "registering benchmark case");
                self.index.insert(identifier.clone(), self.cases.len());
                self.cases.push(Case {
                    identifier,
                    body: Box::new(body),
                });
            }
        }
        self
    }

    /// Discover every registered case identifier, in declaration order.
    ///
    /// Only identifiers carrying the `case_` convention prefix are
    /// returned; an empty registry yields an empty iterator.
    pub fn cases(&self) -> impl Iterator<Item = &str> {
        self.cases
            .iter()
            .map(|case| case.identifier.as_str())
            .filter(|id| id.starts_with(CASE_PREFIX))
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases are registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Dispatcher hook: run the setup routine once, or do nothing if none
    /// was registered.
    pub fn run_setup(&mut self) {
        if let Some(setup) = self.setup.as_mut() {
            setup();
        }
    }

    /// Dispatcher hook: iterate `(identifier, body)` pairs mutably, in
    /// discovery order.
    pub fn cases_mut(&mut self) -> impl Iterator<Item = (&str, &mut CaseBody)> {
        self.cases
            .iter_mut()
            .map(|case| (case.identifier.as_str(), &mut case.body))
            .filter(|(id, _)| id.starts_with(CASE_PREFIX))
    }
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("has_setup", &self.setup.is_some())
            .field("cases", &self.cases.len())
            .finish()
    }
}
