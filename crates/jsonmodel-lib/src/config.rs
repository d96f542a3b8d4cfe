//! Run configuration for the JSON context.

use indexmap::IndexMap;
use jsonmodel_core::utils::matches_type_pattern;

use crate::known::DateShape;

/// Configuration for a JSON context run.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Shape applied to every date-like known type
    pub(crate) date_shape: DateShape,
    /// Omit superclass edges from the type graph
    pub(crate) collapse_type_hierarchy: bool,
    /// Target qualified name to mixin qualified name
    pub(crate) mixins: IndexMap<String, String>,
    /// Type patterns excluded from the API surface
    pub(crate) excludes: Vec<String>,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how date-like types are written.
    pub fn date_shape(mut self, value: DateShape) -> Self {
        self.date_shape = value;
        self
    }

    /// Set whether superclasses are left out of the type graph.
    pub fn collapse_type_hierarchy(mut self, value: bool) -> Self {
        self.collapse_type_hierarchy = value;
        self
    }

    /// Borrow declaration hints for `target` from `mixin`.
    pub fn mixin(mut self, target: impl Into<String>, mixin: impl Into<String>) -> Self {
        self.mixins.insert(target.into(), mixin.into());
        self
    }

    /// Exclude types matching `pattern` (`a.b.C`, `a.b.*` or `a.b.**`).
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    pub fn is_collapse_type_hierarchy(&self) -> bool {
        self.collapse_type_hierarchy
    }

    pub fn is_excluded(&self, qualified_name: &str) -> bool {
        self.excludes
            .iter()
            .any(|pattern| matches_type_pattern(pattern, qualified_name))
    }

    pub(crate) fn mixin_for(&self, qualified_name: &str) -> Option<&str> {
        self.mixins.get(qualified_name).map(String::as_str)
    }
}
