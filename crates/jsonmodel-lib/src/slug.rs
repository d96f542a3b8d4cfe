//! Short, collision-resolved names for type definitions.
//!
//! Slugs are built from the end of the qualified name. `com.acme.Foo` first
//! tries `Foo`, then `acme_Foo`, then `com_acme_Foo`. The first free candidate
//! is claimed, so the outcome depends on the order in which names ask:
//! callers must ask in a deterministic order.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct SlugAssigner {
    /// Slug to owning qualified name.
    owners: IndexMap<String, String>,
}

impl SlugAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `qualified_name`, claiming one on first request.
    ///
    /// When every candidate is owned by another name, the longest candidate is
    /// returned unclaimed and is shared: `x.Foo` then `Foo` both get `Foo`.
    pub fn slug_for(&mut self, qualified_name: &str) -> String {
        let mut slug = String::new();
        for segment in qualified_name.rsplit('.') {
            slug = if slug.is_empty() {
                segment.to_string()
            } else {
                format!("{segment}_{slug}")
            };

            let owner = self
                .owners
                .entry(slug.clone())
                .or_insert_with(|| qualified_name.to_string());
            if owner.as_str() == qualified_name {
                return slug;
            }
        }
        slug
    }

    /// Slug already claimed by `qualified_name`, if any.
    pub fn find(&self, qualified_name: &str) -> Option<&str> {
        self.owners
            .iter()
            .find(|(_, owner)| owner.as_str() == qualified_name)
            .map(|(slug, _)| slug.as_str())
    }

    /// Owner of a claimed slug.
    pub fn owner(&self, slug: &str) -> Option<&str> {
        self.owners.get(slug).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Claimed slugs with their owners, in claim order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.owners.iter().map(|(s, o)| (s.as_str(), o.as_str()))
    }
}
