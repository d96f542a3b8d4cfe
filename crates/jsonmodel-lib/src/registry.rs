use indexmap::IndexMap;

use crate::definition::TypeDefinition;

/// Registered definitions by qualified name, in insertion order.
///
/// Append-only for the duration of a run. Insertion order drives slug
/// assignment, so it must follow a deterministic traversal.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: IndexMap<String, TypeDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition unless its name is already taken.
    ///
    /// Returns `false` (leaving the existing entry untouched) on a repeat.
    pub(crate) fn insert(&mut self, definition: TypeDefinition) -> bool {
        if self.definitions.contains_key(&definition.qualified_name) {
            return false;
        }
        self.definitions
            .insert(definition.qualified_name.clone(), definition);
        true
    }

    pub(crate) fn get_mut(&mut self, qualified_name: &str) -> Option<&mut TypeDefinition> {
        self.definitions.get_mut(qualified_name)
    }

    pub fn get(&self, qualified_name: &str) -> Option<&TypeDefinition> {
        self.definitions.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.definitions.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}
