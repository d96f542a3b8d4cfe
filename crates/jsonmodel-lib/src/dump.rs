use std::fmt::Write;

use jsonmodel_core::Introspector;

use crate::context::JsonContext;

impl<'m, I: Introspector + ?Sized> JsonContext<'m, I> {
    /// Text rendering of the registry, one block per definition in
    /// registration order. Slugs claimed so far are listed at the end.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for def in self.registry.iter() {
            writeln!(out, "{} {}", def.kind().as_str(), def.qualified_name()).unwrap();
            for member in def.members() {
                writeln!(out, "  {}: {}", member.name, member.accessor_type).unwrap();
            }
            if let Some(value) = def.value() {
                writeln!(out, "  (value): {}", value.accessor_type).unwrap();
            }
            if !def.constants().is_empty() {
                writeln!(out, "  = {}", def.constants().join(" | ")).unwrap();
            }
            let subtypes: Vec<_> = def.subtypes().collect();
            if !subtypes.is_empty() {
                writeln!(out, "  <: {}", subtypes.join(", ")).unwrap();
            }
        }

        if !self.slugs.is_empty() {
            writeln!(out).unwrap();
            for (slug, owner) in self.slugs.iter() {
                writeln!(out, "{slug} -> {owner}").unwrap();
            }
        }
        out
    }
}
