//! Classified type definitions.

use std::fmt;

use indexmap::IndexSet;
use jsonmodel_core::utils::simple_name;
use jsonmodel_core::{Accessor, Hints, TypeRef};

/// Classification of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    /// Object with members.
    Object,
    /// Object wrapping a single scalar value; members are kept for docs.
    Simple,
    Enum,
    /// Enum whose values are qualified names.
    QNameEnum,
}

impl DefinitionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Simple => "simple",
            Self::Enum => "enum",
            Self::QNameEnum => "qname-enum",
        }
    }

    pub fn is_enum(self) -> bool {
        matches!(self, Self::Enum | Self::QNameEnum)
    }
}

/// One step of the path through which a type was discovered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathElement {
    Type(String),
    Member { owner: String, name: String },
    Value { owner: String },
    SubtypesHint,
    SeeAlsoHint,
    Superclass { owner: String },
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Member { owner, name } => write!(f, "{owner}.{name}"),
            Self::Value { owner } => write!(f, "{owner} (value)"),
            Self::SubtypesHint => f.write_str("subtypes hint"),
            Self::SeeAlsoHint => f.write_str("see-also hint"),
            Self::Superclass { owner } => write!(f, "{owner} (superclass)"),
        }
    }
}

/// A type that gets its own definition in the generated model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub(crate) qualified_name: String,
    pub(crate) kind: DefinitionKind,
    pub(crate) members: Vec<Accessor>,
    pub(crate) value: Option<Accessor>,
    pub(crate) superclass: Option<TypeRef>,
    pub(crate) constants: Vec<String>,
    /// Hints after mixin merging.
    pub(crate) hints: Hints,
    pub(crate) subtypes: IndexSet<String>,
    pub(crate) referenced_from: Vec<PathElement>,
    pub(crate) source: Option<String>,
}

impl TypeDefinition {
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    pub fn members(&self) -> &[Accessor] {
        &self.members
    }

    pub fn value(&self) -> Option<&Accessor> {
        self.value.as_ref()
    }

    pub fn superclass(&self) -> Option<&TypeRef> {
        self.superclass.as_ref()
    }

    pub fn constants(&self) -> &[String] {
        &self.constants
    }

    pub fn hints(&self) -> &Hints {
        &self.hints
    }

    /// Subtypes discovered for this definition, in discovery order.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.subtypes.iter().map(String::as_str)
    }

    /// Path through which the definition was first reached, root first.
    pub fn referenced_from(&self) -> &[PathElement] {
        &self.referenced_from
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
