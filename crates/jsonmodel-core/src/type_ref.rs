//! Type handles into the host type system.
//!
//! A `TypeRef` is what a field, a superclass clause or a generic argument
//! points at. It carries only structure: whether a declared name is an enum,
//! an interface or a container is answered by the [`Introspector`].
//!
//! `Display` writes the type-expression notation understood by
//! [`crate::type_expr::parse`]. Arrays of bounded type variables are the one
//! shape that does not read back unchanged (the bound swallows the `[]`).
//!
//! [`Introspector`]: crate::Introspector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::type_expr::{self, ParseError};

/// Built-in primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 9] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Char,
        Self::Float,
        Self::Double,
        Self::Void,
    ];

    /// Keyword used in type expressions (also the platform's name for it).
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Char => "char",
            Self::Float => "float",
            Self::Double => "double",
            Self::Void => "void",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Structural kind of a type handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// A declared class, interface or enum with its generic arguments.
    Declared { name: String, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
    TypeVar {
        name: String,
        bound: Option<Box<TypeRef>>,
    },
    Wildcard {
        extends: Option<Box<TypeRef>>,
        super_: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    /// Declared type without type arguments.
    pub fn declared(name: impl Into<String>) -> Self {
        Self::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        Self::Declared {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn array_of(component: TypeRef) -> Self {
        Self::Array(Box::new(component))
    }

    /// Qualified name of a declared type; `None` for every other kind.
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Generic arguments of a declared type (empty for other kinds).
    pub fn type_args(&self) -> &[TypeRef] {
        match self {
            Self::Declared { args, .. } => args,
            _ => &[],
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveKind::Void))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.name()),
            Self::Declared { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array(component) => write!(f, "{component}[]"),
            Self::TypeVar { name, bound } => {
                write!(f, "${name}")?;
                if let Some(bound) = bound {
                    write!(f, " extends {bound}")?;
                }
                Ok(())
            }
            Self::Wildcard { extends, super_ } => {
                f.write_str("?")?;
                if let Some(bound) = extends {
                    write!(f, " extends {bound}")?;
                }
                if let Some(bound) = super_ {
                    write!(f, " super {bound}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for TypeRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type_expr::parse(s)
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
