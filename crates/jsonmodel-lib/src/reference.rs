//! Data-type references and media types, for renderers.

use std::fmt;

use jsonmodel_core::{ContainerKind, Introspector, PrimitiveKind, TypeRef};

use crate::context::JsonContext;
use crate::known::KnownType;

/// What a type looks like in generated JSON documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataTypeReference {
    Known(KnownType),
    Array(Box<DataTypeReference>),
    /// Object keyed by strings, with values of the inner reference.
    Map(Box<DataTypeReference>),
    /// A registered definition, by qualified name.
    Definition(String),
}

impl fmt::Display for DataTypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(known) => f.write_str(known.as_str()),
            Self::Array(item) => write!(f, "array<{item}>"),
            Self::Map(value) => write!(f, "map<{value}>"),
            Self::Definition(name) => write!(f, "#{name}"),
        }
    }
}

/// A media type paired with the reference that describes its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypeDescriptor {
    pub media_type: String,
    pub data_type: DataTypeReference,
}

fn is_wildcard_media_type(media_type: &str) -> bool {
    media_type == "*/*" || media_type == "application/*"
}

fn is_json_media_type(media_type: &str) -> bool {
    media_type.ends_with("/json") || media_type.ends_with("+json")
}

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    pub fn is_assignable_to_media_type(&self, media_type: &str) -> bool {
        is_wildcard_media_type(media_type) || is_json_media_type(media_type)
    }

    /// Descriptor for a payload of type `ty` sent as `media_type`.
    ///
    /// Wildcards resolve to `application/json`. `None` for non-JSON media
    /// types and for types with no JSON representation.
    pub fn find_media_type_descriptor(
        &self,
        media_type: &str,
        ty: &TypeRef,
    ) -> Option<MediaTypeDescriptor> {
        let media_type = if is_wildcard_media_type(media_type) {
            "application/json"
        } else {
            media_type
        };
        if !is_json_media_type(media_type) {
            return None;
        }
        let data_type = self.find_data_type_reference(ty)?;
        Some(MediaTypeDescriptor {
            media_type: media_type.to_string(),
            data_type,
        })
    }

    /// Best-effort reference for documentation links; never fails.
    pub fn find_data_type_reference(&self, ty: &TypeRef) -> Option<DataTypeReference> {
        match ty {
            TypeRef::Primitive(kind) => primitive_reference(*kind),
            TypeRef::Array(component) => {
                if matches!(**component, TypeRef::Primitive(PrimitiveKind::Byte)) {
                    return Some(DataTypeReference::Known(KnownType::String));
                }
                let item = self.find_data_type_reference(component)?;
                Some(DataTypeReference::Array(Box::new(item)))
            }
            TypeRef::TypeVar { bound, .. } => self.bound_reference(bound.as_deref()),
            TypeRef::Wildcard { extends, .. } => self.bound_reference(extends.as_deref()),
            TypeRef::Declared { name, args } => self.declared_reference(ty, name, args),
        }
    }

    fn bound_reference(&self, bound: Option<&TypeRef>) -> Option<DataTypeReference> {
        match bound {
            Some(bound) => self.find_data_type_reference(bound),
            None => Some(DataTypeReference::Known(KnownType::Object)),
        }
    }

    fn declared_reference(
        &self,
        ty: &TypeRef,
        name: &str,
        args: &[TypeRef],
    ) -> Option<DataTypeReference> {
        let model = self.model;
        if let Some(decl) = model.declaration(name) {
            let hints = self.hints_of(decl);
            if let Some(adapter) = &hints.adapter {
                return self.find_data_type_reference(adapter);
            }
        }

        if let Some(known) = self.known.classify(name) {
            return Some(DataTypeReference::Known(known));
        }
        if self.registry.contains(name) {
            return Some(DataTypeReference::Definition(name.to_string()));
        }

        let object = || DataTypeReference::Known(KnownType::Object);
        match model.container_kind(ty) {
            Some(ContainerKind::Map) => {
                let value = match args.last() {
                    Some(arg) => self.find_data_type_reference(arg)?,
                    None => object(),
                };
                Some(DataTypeReference::Map(Box::new(value)))
            }
            Some(ContainerKind::Collection) => {
                let item = match args.first() {
                    Some(arg) => self.find_data_type_reference(arg)?,
                    None => object(),
                };
                Some(DataTypeReference::Array(Box::new(item)))
            }
            None if model.is_element_wrapper(name) => match args.first() {
                Some(arg) => self.find_data_type_reference(arg),
                None => Some(object()),
            },
            None => None,
        }
    }
}

fn primitive_reference(kind: PrimitiveKind) -> Option<DataTypeReference> {
    let known = match kind {
        PrimitiveKind::Boolean => KnownType::Boolean,
        PrimitiveKind::Char => KnownType::String,
        PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long => {
            KnownType::WholeNumber
        }
        PrimitiveKind::Float | PrimitiveKind::Double => KnownType::Number,
        PrimitiveKind::Void => return None,
    };
    Some(DataTypeReference::Known(known))
}
