//! Declaration model: what the host knows about each declared type.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
}

/// Serialization shape override declared on a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Natural,
    Object,
    Scalar,
    Array,
    String,
    Number,
}

/// Declaration-level hints (annotations, in host terms).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    /// On-the-wire type this declaration is adapted to.
    pub adapter: Option<TypeRef>,
    /// Explicit polymorphic subtypes. `Some(vec![])` still counts as explicit.
    pub subtypes: Option<Vec<String>>,
    /// Additional types to document alongside this one.
    pub see_also: Option<Vec<String>>,
    pub ignored: bool,
    pub shape: Shape,
    /// The declaration explicitly declares an object schema type.
    pub schema_type: bool,
    /// Enum values are restricted to qualified names.
    pub qname_enum: bool,
}

impl Hints {
    pub fn has_subtype_hints(&self) -> bool {
        self.subtypes.is_some() || self.see_also.is_some()
    }

    /// Fill every hint missing here from `fallback`.
    pub fn merged_with(&self, fallback: &Hints) -> Hints {
        Hints {
            adapter: self.adapter.clone().or_else(|| fallback.adapter.clone()),
            subtypes: self.subtypes.clone().or_else(|| fallback.subtypes.clone()),
            see_also: self.see_also.clone().or_else(|| fallback.see_also.clone()),
            ignored: self.ignored || fallback.ignored,
            shape: match self.shape {
                Shape::Natural => fallback.shape,
                shape => shape,
            },
            schema_type: self.schema_type || fallback.schema_type,
            qname_enum: self.qname_enum || fallback.qname_enum,
        }
    }
}

/// A field, property or value slot of a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    pub accessor_type: TypeRef,
    /// Substituted on-the-wire type when the accessor is adapted.
    pub adapter: Option<TypeRef>,
    /// Enumeration restricting the accessor's values to qualified names.
    pub qname_enum_ref: Option<TypeRef>,
    /// Alternate accessors allowed at this position.
    pub choices: Vec<Accessor>,
    pub subtypes: Option<Vec<String>>,
    pub see_also: Option<Vec<String>>,
    pub ignored: bool,
}

impl Accessor {
    pub fn new(name: impl Into<String>, accessor_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            accessor_type,
            adapter: None,
            qname_enum_ref: None,
            choices: Vec::new(),
            subtypes: None,
            see_also: None,
            ignored: false,
        }
    }

    pub fn is_adapted(&self) -> bool {
        self.adapter.is_some()
    }

    /// Type that actually goes over the wire, if it needs walking.
    ///
    /// Adapted accessors use the adapter type. A QName-enum restriction
    /// replaces the accessor type entirely, so there is nothing to walk.
    pub fn referenced_type(&self) -> Option<&TypeRef> {
        match (&self.adapter, &self.qname_enum_ref) {
            (Some(adapter), _) => Some(adapter),
            (None, None) => Some(&self.accessor_type),
            (None, Some(_)) => None,
        }
    }
}

/// A declared class, interface or enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub qualified_name: String,
    pub kind: DeclKind,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub members: Vec<Accessor>,
    /// Scalar value accessor; its presence makes the type a simple type.
    pub value: Option<Accessor>,
    pub constants: Vec<String>,
    pub hints: Hints,
    /// Source file, when the host could locate one.
    pub source: Option<String>,
    /// Library declarations resolve but are not part of the API surface.
    pub library: bool,
}

impl Declaration {
    pub fn new(qualified_name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            value: None,
            constants: Vec::new(),
            hints: Hints::default(),
            source: None,
            library: false,
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind == DeclKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == DeclKind::Interface
    }

    pub fn is_enum(&self) -> bool {
        self.kind == DeclKind::Enum
    }

    /// Names of the direct supertypes (superclass first, then interfaces).
    pub fn supertype_names(&self) -> impl Iterator<Item = &str> {
        self.superclass
            .iter()
            .chain(self.interfaces.iter())
            .filter_map(TypeRef::declared_name)
    }

    /// The declaration as a type handle without arguments.
    pub fn as_type(&self) -> TypeRef {
        TypeRef::declared(self.qualified_name.clone())
    }
}

/// Names the host treats specially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Root of every class hierarchy; never a definition.
    #[serde(default = "default_base_object")]
    pub base_object: String,
    /// Generic element wrapper; anything assignable to it is a known type.
    #[serde(default = "default_element_wrapper")]
    pub element_wrapper: String,
    /// Collection roots; assignable types are transparent lists.
    #[serde(default = "default_collections")]
    pub collections: Vec<String>,
    /// Map roots; assignable types are transparent maps.
    #[serde(default = "default_maps")]
    pub maps: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            base_object: default_base_object(),
            element_wrapper: default_element_wrapper(),
            collections: default_collections(),
            maps: default_maps(),
        }
    }
}

fn default_base_object() -> String {
    "java.lang.Object".to_string()
}

fn default_element_wrapper() -> String {
    "javax.xml.bind.JAXBElement".to_string()
}

fn default_collections() -> Vec<String> {
    vec!["java.util.Collection".to_string()]
}

fn default_maps() -> Vec<String> {
    vec!["java.util.Map".to_string()]
}
