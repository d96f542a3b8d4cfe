//! The run-scoped JSON context.

use std::borrow::Cow;

use jsonmodel_core::{Declaration, Hints, Introspector, TypeRef};
use tracing::debug;

use crate::advisory::Advisories;
use crate::config::Config;
use crate::definition::TypeDefinition;
use crate::known::{KnownType, KnownTypes};
use crate::registry::Registry;
use crate::slug::SlugAssigner;
use crate::walk::ReferencePath;
use crate::{Error, Result};

/// Traversal context for one generation run.
///
/// Owns the registry, the slug map and the advisories of the run. Borrows
/// the host model for its whole lifetime, so declarations handed out by the
/// model stay valid while the context is mutated.
pub struct JsonContext<'m, I: ?Sized> {
    pub(crate) model: &'m I,
    pub(crate) config: Config,
    pub(crate) known: KnownTypes,
    pub(crate) registry: Registry,
    pub(crate) slugs: SlugAssigner,
    pub(crate) advisories: Advisories,
}

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    pub const SYNTAX_ID: &'static str = "json";
    pub const SYNTAX_LABEL: &'static str = "JSON";
    pub const SYNTAX_SLUG: &'static str = "syntax_json";

    pub fn new(model: &'m I, config: Config) -> Self {
        let known = KnownTypes::new(config.date_shape);
        Self {
            model,
            config,
            known,
            registry: Registry::new(),
            slugs: SlugAssigner::new(),
            advisories: Advisories::new(),
        }
    }

    pub fn model(&self) -> &'m I {
        self.model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn known_types(&self) -> &KnownTypes {
        &self.known
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn advisories(&self) -> &Advisories {
        &self.advisories
    }

    // ========================================================================
    // Roots
    // ========================================================================

    /// Register the declaration of a root API type and everything it reaches.
    pub fn add_root(&mut self, qualified_name: &str) -> Result<()> {
        let model = self.model;
        let decl = model
            .declaration(qualified_name)
            .ok_or_else(|| Error::UnknownRoot(qualified_name.to_string()))?;
        if self.is_known_type(qualified_name) {
            debug!(type_name = qualified_name, "root is a known type");
            return Ok(());
        }
        let definition = self.create_type_definition(decl)?;
        self.add(definition, &mut ReferencePath::new())
    }

    /// Walk a root type reference, such as a resource method's entity type.
    pub fn add_root_type(&mut self, ty: &TypeRef) -> Result<()> {
        self.resolve_reference(ty, &mut ReferencePath::new())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Registered definitions in registration order.
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.registry.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn find_type_definition(&self, qualified_name: &str) -> Option<&TypeDefinition> {
        self.registry.get(qualified_name)
    }

    /// Registered, or known and therefore never registered.
    pub fn is_known_type_definition(&self, qualified_name: &str) -> bool {
        self.registry.contains(qualified_name) || self.is_known_type(qualified_name)
    }

    /// In the known-type table, or an element wrapper.
    pub fn is_known_type(&self, qualified_name: &str) -> bool {
        self.known.contains(qualified_name) || self.model.is_element_wrapper(qualified_name)
    }

    pub fn known_type(&self, qualified_name: &str) -> Option<KnownType> {
        self.known.classify(qualified_name)
    }

    pub fn is_ignored(&self, qualified_name: &str) -> bool {
        self.model
            .declaration(qualified_name)
            .is_some_and(|decl| self.hints_of(decl).ignored)
    }

    /// Definitions sorted by label (simple name), then by qualified name.
    pub fn data_types(&self) -> Vec<&TypeDefinition> {
        let mut types: Vec<_> = self.registry.iter().collect();
        types.sort_by(|a, b| {
            a.simple_name()
                .cmp(b.simple_name())
                .then_with(|| a.qualified_name().cmp(b.qualified_name()))
        });
        types
    }

    /// The registered definition for `name`, as a list for renderer lookups.
    pub fn find_data_types(&self, name: &str) -> Vec<&TypeDefinition> {
        if name.is_empty() {
            return Vec::new();
        }
        self.registry.get(name).into_iter().collect()
    }

    // ========================================================================
    // Slugs
    // ========================================================================

    pub fn slug_for(&mut self, qualified_name: &str) -> String {
        self.slugs.slug_for(qualified_name)
    }

    /// Claim a slug for every registered definition, in registration order.
    pub fn assign_slugs(&mut self) {
        let names: Vec<String> = self.registry.names().map(str::to_string).collect();
        for name in names {
            self.slugs.slug_for(&name);
        }
    }

    pub fn slugs(&self) -> &SlugAssigner {
        &self.slugs
    }

    // ========================================================================
    // Hints
    // ========================================================================

    /// Declaration hints with any configured mixin's hints filled in.
    pub(crate) fn hints_of<'d>(&self, decl: &'d Declaration) -> Cow<'d, Hints> {
        let Some(mixin) = self.config.mixin_for(&decl.qualified_name) else {
            return Cow::Borrowed(&decl.hints);
        };
        let model = self.model;
        match model.declaration(mixin) {
            Some(mixin) => Cow::Owned(decl.hints.merged_with(&mixin.hints)),
            None => {
                debug!(
                    type_name = %decl.qualified_name,
                    mixin,
                    "mixin is not declared; using own hints"
                );
                Cow::Borrowed(&decl.hints)
            }
        }
    }
}
