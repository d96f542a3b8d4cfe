//! Non-fatal findings collected during a run.

use std::fmt;

use tracing::warn;

/// Kind of advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryKind {
    /// A type matched an exclusion pattern but something reachable needed it.
    ExcludedTypeIncluded,
    /// Some registered type has no source location. Reported once per run.
    SourceFilesNotFound,
}

impl AdvisoryKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExcludedTypeIncluded => "excluded type was included",
            Self::SourceFilesNotFound => {
                "unable to find source files for some types; documentation may be incomplete"
            }
        }
    }

    /// Whether only the first report of this kind is kept.
    pub fn is_once_per_run(&self) -> bool {
        matches!(self, Self::SourceFilesNotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Advisories {
    items: Vec<Advisory>,
}

#[must_use = "advisory not emitted, call .emit()"]
pub struct AdvisoryBuilder<'a> {
    advisories: &'a mut Advisories,
    advisory: Advisory,
}

impl Advisories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an advisory of the given kind with the kind's fallback message.
    pub fn report(&mut self, kind: AdvisoryKind) -> AdvisoryBuilder<'_> {
        AdvisoryBuilder {
            advisories: self,
            advisory: Advisory {
                kind,
                message: kind.fallback_message().to_string(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        self.items.iter()
    }

    pub fn has(&self, kind: AdvisoryKind) -> bool {
        self.items.iter().any(|a| a.kind == kind)
    }

    pub fn count(&self, kind: AdvisoryKind) -> usize {
        self.items.iter().filter(|a| a.kind == kind).count()
    }
}

impl<'a> AdvisoryBuilder<'a> {
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.advisory.message = msg.into();
        self
    }

    /// Record the advisory and log it.
    ///
    /// Once-per-run kinds are dropped silently after their first emission.
    pub fn emit(self) {
        let kind = self.advisory.kind;
        if kind.is_once_per_run() && self.advisories.has(kind) {
            return;
        }
        warn!(kind = ?kind, "{}", self.advisory.message);
        self.advisories.items.push(self.advisory);
    }
}
