//! Heap-allocated model built at runtime from a description.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::json::{ModelError, RawDeclaration, parse_raw_model};
use super::types::{DeclKind, Declaration, Markers};
use crate::{ContainerKind, Introspector, TypeRef};

/// Declaration universe held in memory, in description order.
///
/// Use this for tests and for embedders that materialize the host's
/// declarations up front. A standard-library prelude of container types is
/// always present unless the description declares the same names.
#[derive(Debug, Clone)]
pub struct DynamicModel {
    declarations: IndexMap<String, Declaration>,
    markers: Markers,
}

impl DynamicModel {
    /// Build from a JSON model description.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let raw = parse_raw_model(json)?;
        let declarations = raw
            .declarations
            .into_iter()
            .map(RawDeclaration::into_declaration)
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(raw.markers, declarations)
    }

    /// Build from already materialized declarations.
    pub fn build(
        markers: Markers,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Result<Self, ModelError> {
        let mut by_name = IndexMap::new();
        for decl in declarations {
            if by_name.contains_key(&decl.qualified_name) {
                return Err(ModelError::DuplicateDeclaration(decl.qualified_name));
            }
            by_name.insert(decl.qualified_name.clone(), decl);
        }

        for decl in prelude() {
            by_name.entry(decl.qualified_name.clone()).or_insert(decl);
        }

        Ok(Self {
            declarations: by_name,
            markers,
        })
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn get(&self, qualified_name: &str) -> Option<&Declaration> {
        self.declarations.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.declarations.contains_key(qualified_name)
    }

    /// Number of declarations, prelude included.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.values()
    }
}

impl Introspector for DynamicModel {
    fn declaration(&self, qualified_name: &str) -> Option<&Declaration> {
        self.declarations.get(qualified_name)
    }

    fn api_declarations(&self) -> Box<dyn Iterator<Item = &Declaration> + '_> {
        Box::new(self.declarations.values().filter(|d| !d.library))
    }

    fn is_assignable(&self, sub: &str, sup: &str) -> bool {
        if sub == sup || sup == self.markers.base_object {
            return true;
        }

        let mut visited = HashSet::new();
        let mut pending = vec![sub];
        while let Some(name) = pending.pop() {
            if name == sup {
                return true;
            }
            if !visited.insert(name) {
                continue;
            }
            if let Some(decl) = self.declarations.get(name) {
                pending.extend(decl.supertype_names());
            }
        }
        false
    }

    fn container_kind(&self, ty: &TypeRef) -> Option<ContainerKind> {
        let name = ty.declared_name()?;
        if self.markers.maps.iter().any(|m| self.is_assignable(name, m)) {
            return Some(ContainerKind::Map);
        }
        if self
            .markers
            .collections
            .iter()
            .any(|c| self.is_assignable(name, c))
        {
            return Some(ContainerKind::Collection);
        }
        None
    }

    fn is_element_wrapper(&self, qualified_name: &str) -> bool {
        self.is_assignable(qualified_name, &self.markers.element_wrapper)
    }

    fn base_object(&self) -> &str {
        &self.markers.base_object
    }
}

fn library(name: &str, kind: DeclKind, supertypes: &[&str]) -> Declaration {
    let mut decl = Declaration::new(name, kind);
    decl.library = true;
    decl.interfaces = supertypes.iter().map(|s| TypeRef::declared(*s)).collect();
    decl
}

fn prelude() -> Vec<Declaration> {
    use DeclKind::{Class, Interface};

    vec![
        library("java.lang.Iterable", Interface, &[]),
        library("java.util.Collection", Interface, &["java.lang.Iterable"]),
        library("java.util.List", Interface, &["java.util.Collection"]),
        library("java.util.Set", Interface, &["java.util.Collection"]),
        library("java.util.SortedSet", Interface, &["java.util.Set"]),
        library("java.util.Queue", Interface, &["java.util.Collection"]),
        library("java.util.Deque", Interface, &["java.util.Queue"]),
        library("java.util.ArrayList", Class, &["java.util.List"]),
        library(
            "java.util.LinkedList",
            Class,
            &["java.util.List", "java.util.Deque"],
        ),
        library("java.util.HashSet", Class, &["java.util.Set"]),
        library("java.util.LinkedHashSet", Class, &["java.util.Set"]),
        library("java.util.TreeSet", Class, &["java.util.SortedSet"]),
        library("java.util.Map", Interface, &[]),
        library("java.util.SortedMap", Interface, &["java.util.Map"]),
        library("java.util.HashMap", Class, &["java.util.Map"]),
        library("java.util.LinkedHashMap", Class, &["java.util.Map"]),
        library("java.util.TreeMap", Class, &["java.util.SortedMap"]),
    ]
}
