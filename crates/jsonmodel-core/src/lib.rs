#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for describing a host type system.
//!
//! Three pieces:
//! - **Type handles** (`TypeRef`): primitives, declared types, arrays, type
//!   variables and wildcards, with a text notation (`type_expr`)
//! - **Declarations** (`model`): classes, interfaces and enums with their
//!   accessors and hints
//! - **Introspection** (`Introspector`): the queries a schema builder needs
//!   from the host, implemented in memory by `DynamicModel`

pub mod model;
pub mod type_expr;
mod type_ref;
pub mod utils;


pub use model::{
    Accessor, DeclKind, Declaration, DynamicModel, Hints, Markers, ModelError, Shape,
};
pub use type_ref::{PrimitiveKind, TypeRef};

/// Kind of a structurally detected container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Collection,
    Map,
}

// ============================================================================
// Introspector Trait
// ============================================================================

/// Queries against the host type system.
///
/// Everything a schema builder needs that a `TypeRef` cannot tell by itself:
/// - Declaration lookup by qualified name
/// - The API surface (all declarations visible to a run)
/// - Assignability between declared types
/// - Structural container and element-wrapper detection
pub trait Introspector {
    fn declaration(&self, qualified_name: &str) -> Option<&Declaration>;

    /// API declarations in a stable order. Library declarations are excluded.
    fn api_declarations(&self) -> Box<dyn Iterator<Item = &Declaration> + '_>;

    /// Whether `sub` is `sup` or inherits from it (superclasses and interfaces).
    fn is_assignable(&self, sub: &str, sup: &str) -> bool;

    /// Container kind of a declared type, detected through assignability.
    fn container_kind(&self, ty: &TypeRef) -> Option<ContainerKind>;

    fn is_element_wrapper(&self, qualified_name: &str) -> bool;

    /// Qualified name of the root of every class hierarchy.
    fn base_object(&self) -> &str;

    fn is_container(&self, ty: &TypeRef) -> bool {
        self.container_kind(ty).is_some()
    }

    fn is_base_object(&self, qualified_name: &str) -> bool {
        self.base_object() == qualified_name
    }
}

impl<T: Introspector + ?Sized> Introspector for &T {
    fn declaration(&self, qualified_name: &str) -> Option<&Declaration> {
        (*self).declaration(qualified_name)
    }
    fn api_declarations(&self) -> Box<dyn Iterator<Item = &Declaration> + '_> {
        (*self).api_declarations()
    }
    fn is_assignable(&self, sub: &str, sup: &str) -> bool {
        (*self).is_assignable(sub, sup)
    }
    fn container_kind(&self, ty: &TypeRef) -> Option<ContainerKind> {
        (*self).container_kind(ty)
    }
    fn is_element_wrapper(&self, qualified_name: &str) -> bool {
        (*self).is_element_wrapper(qualified_name)
    }
    fn base_object(&self) -> &str {
        (*self).base_object()
    }
}
