//! Type hierarchy lookups across the whole catalog.

use arch_fit_core::{simple_name, ComponentCatalog, TypeDecl};
use std::collections::{HashMap, HashSet};

/// Declared types indexed by simple name, for transitive is-a checks.
pub(crate) struct TypeHierarchy<'a> {
    by_name: HashMap<&'a str, Vec<&'a TypeDecl>>,
}

impl<'a> TypeHierarchy<'a> {
    pub(crate) fn new(catalog: &'a dyn ComponentCatalog) -> Self {
        let mut by_name: HashMap<&'a str, Vec<&'a TypeDecl>> = HashMap::new();
        for component in catalog.list_components() {
            for ty in &component.types {
                by_name.entry(ty.name.as_str()).or_default().push(ty);
            }
        }
        Self { by_name }
    }

    /// Whether `ty` names `ancestor` among its bases, directly or through
    /// declared base types. Cycles terminate.
    pub(crate) fn is_a(&self, ty: &TypeDecl, ancestor: &str) -> bool {
        let wanted = simple_name(ancestor);
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: Vec<&str> = ty.bases.iter().map(|b| simple_name(b)).collect();

        while let Some(base) = pending.pop() {
            if base == wanted {
                return true;
            }
            if !visited.insert(base) {
                continue;
            }
            if let Some(decls) = self.by_name.get(base) {
                for decl in decls {
                    pending.extend(decl.bases.iter().map(|b| simple_name(b)));
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_fit_core::{CatalogSnapshot, Component};

    #[test]
    fn direct_and_transitive_bases() {
        let catalog = CatalogSnapshot::new(vec![
            Component::new("Root.BuildingBlocks.Infrastructure")
                .declares(TypeDecl::class("AuditedContext").abstract_().with_base("DbContext")),
            Component::new("Root.Modules.A.Infrastructure")
                .declares(TypeDecl::class("OrdersContext").with_base("Root.BuildingBlocks.AuditedContext")),
        ]);
        let hierarchy = TypeHierarchy::new(&catalog);

        let direct = TypeDecl::class("X").with_base("Microsoft.EntityFrameworkCore.DbContext");
        assert!(hierarchy.is_a(&direct, "DbContext"));

        let transitive = TypeDecl::class("Y").with_base("OrdersContext");
        assert!(hierarchy.is_a(&transitive, "DbContext"));

        let unrelated = TypeDecl::class("Z").with_base("Entity");
        assert!(!hierarchy.is_a(&unrelated, "DbContext"));
    }

    #[test]
    fn cycles_terminate() {
        let catalog = CatalogSnapshot::new(vec![Component::new("Root.A")
            .declares(TypeDecl::class("A").with_base("B"))
            .declares(TypeDecl::class("B").with_base("A"))]);
        let hierarchy = TypeHierarchy::new(&catalog);
        assert!(!hierarchy.is_a(&TypeDecl::class("C").with_base("A"), "DbContext"));
    }
}
