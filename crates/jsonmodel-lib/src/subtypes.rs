//! Polymorphic subtype discovery.

use jsonmodel_core::{Accessor, Introspector};

use crate::context::JsonContext;
use crate::definition::{PathElement, TypeDefinition};
use crate::walk::ReferencePath;
use crate::{Error, Result};

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    /// Register the subtypes of a definition; returns the discovered names.
    ///
    /// Explicit subtype and see-also lists are both honored. Without either
    /// list, every other API declaration assignable to the definition is
    /// registered. That scan is linear in the API surface for each such
    /// definition, so a run costs O(N * M) for N declarations and M
    /// definitions without hints.
    pub(crate) fn discover_subtypes(
        &mut self,
        definition: &TypeDefinition,
        path: &mut ReferencePath,
    ) -> Result<Vec<String>> {
        let origin = definition.qualified_name();
        let hints = &definition.hints;
        let mut found = Vec::new();

        if let Some(subtypes) = &hints.subtypes {
            found.extend(self.add_listed(origin, subtypes, PathElement::SubtypesHint, path)?);
        }
        if let Some(see_also) = &hints.see_also {
            self.add_listed(origin, see_also, PathElement::SeeAlsoHint, path)?;
        }
        if !hints.has_subtype_hints() {
            found.extend(self.add_assignable(origin, path)?);
        }
        Ok(found)
    }

    /// Accessor-level lists. There is no fallback scan for accessors.
    pub(crate) fn discover_accessor_subtypes(
        &mut self,
        origin: &str,
        accessor: &Accessor,
        path: &mut ReferencePath,
    ) -> Result<()> {
        if let Some(subtypes) = &accessor.subtypes {
            self.add_listed(origin, subtypes, PathElement::SubtypesHint, path)?;
        }
        if let Some(see_also) = &accessor.see_also {
            self.add_listed(origin, see_also, PathElement::SeeAlsoHint, path)?;
        }
        Ok(())
    }

    fn add_listed(
        &mut self,
        origin: &str,
        names: &[String],
        element: PathElement,
        path: &mut ReferencePath,
    ) -> Result<Vec<String>> {
        let model = self.model;
        path.scoped(element, |path| -> Result<Vec<String>> {
            let mut added = Vec::with_capacity(names.len());
            for name in names {
                let decl = model
                    .declaration(name)
                    .ok_or_else(|| Error::SubtypeUnresolvable {
                        origin: origin.to_string(),
                        subtype: name.clone(),
                    })?;
                let definition = self.create_type_definition(decl)?;
                added.push(definition.qualified_name.clone());
                self.add(definition, path)?;
            }
            Ok(added)
        })
    }

    fn add_assignable(&mut self, origin: &str, path: &mut ReferencePath) -> Result<Vec<String>> {
        let model = self.model;
        let mut added = Vec::new();
        for decl in model.api_declarations() {
            let name = decl.qualified_name.as_str();
            if name == origin || !model.is_assignable(name, origin) {
                continue;
            }
            let definition = self.create_type_definition(decl)?;
            added.push(definition.qualified_name.clone());
            self.add(definition, path)?;
        }
        Ok(added)
    }
}
