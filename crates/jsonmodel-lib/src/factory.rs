//! Classification of declarations into type definitions.

use indexmap::IndexSet;
use jsonmodel_core::{Declaration, Introspector, Shape, TypeRef};

use crate::context::JsonContext;
use crate::definition::{DefinitionKind, TypeDefinition};
use crate::{Error, Result};

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    /// Build the definition for a declaration.
    ///
    /// An adapted declaration is replaced by its adapter target first. Enums
    /// stay enums unless their shape is overridden to `object`; objects with
    /// a value accessor become simple types.
    pub fn create_type_definition(&self, decl: &'m Declaration) -> Result<TypeDefinition> {
        let hints = self.hints_of(decl);
        if decl.is_interface() && hints.schema_type {
            return Err(Error::InterfaceDeclaresSchemaType(
                decl.qualified_name.clone(),
            ));
        }

        let decl = match &hints.adapter {
            Some(target) => self.adapting_declaration(decl, target)?,
            None => decl,
        };
        let hints = self.hints_of(decl).into_owned();

        let kind = if decl.is_enum() && hints.shape != Shape::Object {
            if hints.qname_enum {
                DefinitionKind::QNameEnum
            } else {
                DefinitionKind::Enum
            }
        } else if decl.value.is_some() {
            DefinitionKind::Simple
        } else {
            DefinitionKind::Object
        };

        Ok(TypeDefinition {
            qualified_name: decl.qualified_name.clone(),
            kind,
            members: decl.members.iter().filter(|m| !m.ignored).cloned().collect(),
            value: decl.value.clone(),
            superclass: decl.superclass.clone(),
            constants: decl.constants.clone(),
            hints,
            subtypes: IndexSet::new(),
            referenced_from: Vec::new(),
            source: decl.source.clone(),
        })
    }

    fn adapting_declaration(
        &self,
        decl: &Declaration,
        target: &TypeRef,
    ) -> Result<&'m Declaration> {
        let Some(name) = target.declared_name() else {
            return Err(Error::AdapterTargetNotDeclared {
                declaration: decl.qualified_name.clone(),
                target: target.to_string(),
            });
        };
        let model = self.model;
        model
            .declaration(name)
            .ok_or_else(|| Error::AdapterTargetUnresolvable {
                declaration: decl.qualified_name.clone(),
                target: target.to_string(),
            })
    }
}
