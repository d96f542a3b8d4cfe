//! JSON data-model context: the closed set of type definitions a JSON API needs.
//!
//! Starting from root API types, the context walks the host type graph
//! through members, values, type arguments, enum restrictions, superclasses
//! and polymorphic subtypes, and registers every distinct type that needs a
//! schema definition of its own.
//!
//! - `known` - built-in scalar types that never become definitions
//! - `definition` - classified type definitions and reference paths
//! - `context` - the run-scoped `JsonContext` and its renderer-facing queries
//! - `slug` - collision-resolved short names for cross-references
//! - `advisory` - non-fatal findings collected during a run
//! - `reference` - data-type references and media types for renderers

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod advisory;
pub mod config;
pub mod context;
pub mod definition;
mod dump;
mod factory;
pub mod known;
pub mod reference;
mod registry;
pub mod slug;
mod subtypes;
mod walk;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod factory_tests;
#[cfg(test)]
mod known_tests;
#[cfg(test)]
mod walk_tests;

pub use advisory::{Advisories, Advisory, AdvisoryKind};
pub use config::Config;
pub use context::JsonContext;
pub use definition::{DefinitionKind, PathElement, TypeDefinition};
pub use known::{DateShape, KnownType, KnownTypes};
pub use reference::{DataTypeReference, MediaTypeDescriptor};
pub use registry::Registry;
pub use slug::SlugAssigner;
pub use walk::ReferencePath;

pub use jsonmodel_core::{DynamicModel, Introspector, TypeRef};

/// Fatal errors that abort a run.
///
/// Configuration errors point at declarations that cannot be expressed as
/// JSON types; resolution errors point at references the host cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}: an interface must not declare an object schema type")]
    InterfaceDeclaresSchemaType(String),

    #[error("{declaration} is adapted by `{target}`, which is not a declared type")]
    AdapterTargetNotDeclared { declaration: String, target: String },

    #[error("{declaration} is adapted by `{target}`, which cannot be resolved")]
    AdapterTargetUnresolvable { declaration: String, target: String },

    #[error("{origin} lists subtype `{subtype}`, which cannot be resolved")]
    SubtypeUnresolvable { origin: String, subtype: String },

    #[error("root type `{0}` is not declared")]
    UnknownRoot(String),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InterfaceDeclaresSchemaType(_) | Self::AdapterTargetNotDeclared { .. }
        )
    }

    pub fn is_resolution(&self) -> bool {
        !self.is_configuration()
    }
}

/// Result type for context operations.
pub type Result<T> = std::result::Result<T, Error>;
