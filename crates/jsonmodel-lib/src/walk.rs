//! Graph walk over the host type system.
//!
//! Two stacks travel with the walk:
//! - `ReferencePath` records how a type was reached, for diagnostics. It
//!   spans the whole walk and is extended around every nested step.
//! - `RecursionStack` guards against cycles through type arguments. A fresh
//!   one is created for every type reference being resolved.
//!
//! Both are only changed through `scoped`, which pops on every exit path.

use jsonmodel_core::{Accessor, Declaration, Introspector, TypeRef};
use tracing::debug;

use crate::advisory::AdvisoryKind;
use crate::context::JsonContext;
use crate::definition::{PathElement, TypeDefinition};
use crate::Result;

/// Path through which the walk reached the current type, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencePath {
    elements: Vec<PathElement>,
}

impl ReferencePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[PathElement] {
        &self.elements
    }

    /// Run `f` with `element` pushed.
    pub(crate) fn scoped<T>(
        &mut self,
        element: PathElement,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.elements.push(element);
        let result = f(self);
        self.elements.pop();
        result
    }

    /// "`last`" or "`last` of `previous`", for log messages.
    fn describe_origin(&self) -> String {
        let mut recent = self.elements.iter().rev();
        match (recent.next(), recent.next()) {
            (None, _) => "an unknown location".to_string(),
            (Some(last), None) => last.to_string(),
            (Some(last), Some(previous)) => format!("{last} of {previous}"),
        }
    }
}

/// Declared types currently being visited within one type reference.
#[derive(Debug, Default)]
struct RecursionStack {
    names: Vec<String>,
}

impl RecursionStack {
    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn scoped<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.names.push(name.to_string());
        let result = f(self);
        self.names.pop();
        result
    }
}

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    /// Register a definition and everything reachable from it.
    ///
    /// No-op when the name is already registered or is a known type. The
    /// definition is registered before its edges are walked, so cycles end
    /// at the registry check.
    pub fn add(&mut self, mut definition: TypeDefinition, path: &mut ReferencePath) -> Result<()> {
        let name = definition.qualified_name.clone();
        if self.registry.contains(&name) || self.is_known_type(&name) {
            return Ok(());
        }

        definition.referenced_from = path.as_slice().to_vec();
        self.registry.insert(definition.clone());

        if self.config.is_excluded(&name) {
            let message = format!(
                "added {name} as a JSON type definition even though it was supposed to be \
                 excluded according to configuration; it was referenced from {}, so it had \
                 to be included to prevent broken references",
                path.describe_origin()
            );
            self.advisories
                .report(AdvisoryKind::ExcludedTypeIncluded)
                .message(message)
                .emit();
        } else {
            debug!(type_name = %name, depth = path.len(), "added JSON type definition");
        }

        if definition.source.is_none() {
            self.advisories
                .report(AdvisoryKind::SourceFilesNotFound)
                .emit();
            debug!(type_name = %name, "unable to find source file");
        }

        path.scoped(PathElement::Type(name), |path| {
            self.walk_definition(&definition, path)
        })
    }

    fn walk_definition(
        &mut self,
        definition: &TypeDefinition,
        path: &mut ReferencePath,
    ) -> Result<()> {
        let owner = definition.qualified_name();

        let subtypes = self.discover_subtypes(definition, path)?;
        if let Some(registered) = self.registry.get_mut(owner) {
            registered.subtypes.extend(subtypes);
        }

        for member in &definition.members {
            let element = PathElement::Member {
                owner: owner.to_string(),
                name: member.name.clone(),
            };
            path.scoped(element, |path| self.walk_accessor(owner, member, path))?;
        }

        if let Some(value) = &definition.value {
            let element = PathElement::Value {
                owner: owner.to_string(),
            };
            path.scoped(element, |path| self.walk_accessor(owner, value, path))?;
        }

        if let Some(superclass) = &definition.superclass
            && !self.config.collapse_type_hierarchy
            && !self.model.is_base_object(owner)
            && !superclass.is_void()
        {
            let element = PathElement::Superclass {
                owner: owner.to_string(),
            };
            path.scoped(element, |path| self.resolve_reference(superclass, path))?;
        }

        Ok(())
    }

    /// Accessor hints, the QName-enum restriction, the wire type, then choices.
    fn walk_accessor(
        &mut self,
        owner: &str,
        accessor: &Accessor,
        path: &mut ReferencePath,
    ) -> Result<()> {
        let origin = format!("{owner}.{}", accessor.name);
        self.discover_accessor_subtypes(&origin, accessor, path)?;

        if let Some(restriction) = &accessor.qname_enum_ref {
            self.resolve_reference(restriction, path)?;
        }
        if let Some(ty) = accessor.referenced_type() {
            self.resolve_reference(ty, path)?;
        }
        for choice in &accessor.choices {
            if let Some(ty) = choice.referenced_type() {
                self.resolve_reference(ty, path)?;
            }
        }
        Ok(())
    }

    /// Register every definition a type reference leads to.
    pub fn resolve_reference(&mut self, ty: &TypeRef, path: &mut ReferencePath) -> Result<()> {
        let mut stack = RecursionStack::default();
        self.visit(ty, path, &mut stack)
    }

    fn visit(
        &mut self,
        ty: &TypeRef,
        path: &mut ReferencePath,
        stack: &mut RecursionStack,
    ) -> Result<()> {
        match ty {
            TypeRef::Primitive(_) => Ok(()),
            TypeRef::Array(component) => self.visit(component, path, stack),
            TypeRef::TypeVar { bound, .. } => match bound {
                Some(bound) => self.visit(bound, path, stack),
                None => Ok(()),
            },
            TypeRef::Wildcard { extends, super_ } => {
                if let Some(bound) = extends {
                    self.visit(bound, path, stack)?;
                }
                if let Some(bound) = super_ {
                    self.visit(bound, path, stack)?;
                }
                Ok(())
            }
            TypeRef::Declared { name, args } => self.visit_declared(ty, name, args, path, stack),
        }
    }

    fn visit_all(
        &mut self,
        args: &[TypeRef],
        path: &mut ReferencePath,
        stack: &mut RecursionStack,
    ) -> Result<()> {
        for arg in args {
            self.visit(arg, path, stack)?;
        }
        Ok(())
    }

    fn visit_declared(
        &mut self,
        ty: &TypeRef,
        name: &str,
        args: &[TypeRef],
        path: &mut ReferencePath,
        stack: &mut RecursionStack,
    ) -> Result<()> {
        let model = self.model;
        if model.is_base_object(name) {
            return Ok(());
        }

        let Some(decl) = model.declaration(name) else {
            debug!(type_name = name, "not declared in model; walking type arguments only");
            return self.visit_all(args, path, stack);
        };

        if decl.is_enum() {
            if !self.is_known_type_definition(name) {
                let definition = self.create_type_definition(decl)?;
                self.add(definition, path)?;
            }
            return Ok(());
        }

        if stack.contains(name) {
            return Ok(());
        }

        // Adapted names go on the stack too; adapters may point back at each other.
        if let Some(adapter) = self.hints_of(decl).adapter.clone() {
            return stack.scoped(name, |stack| self.visit(&adapter, path, stack));
        }

        if model.is_container(ty) {
            return self.visit_all(args, path, stack);
        }

        stack.scoped(name, |stack| self.visit_class(decl, args, path, stack))
    }

    fn visit_class(
        &mut self,
        decl: &'m Declaration,
        args: &[TypeRef],
        path: &mut ReferencePath,
        stack: &mut RecursionStack,
    ) -> Result<()> {
        let name = decl.qualified_name.as_str();
        let registrable = decl.is_class() && !self.hints_of(decl).ignored;
        if registrable && !self.is_known_type_definition(name) {
            let definition = self.create_type_definition(decl)?;
            self.add(definition, path)?;
        }
        self.visit_all(args, path, stack)
    }
}
