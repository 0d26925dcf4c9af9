//! Dependency graph view over catalog edges.
//!
//! Only direct edges count: "A depends on B" means B is in A's declared
//! reference set. There is no transitive closure.

use std::collections::{HashMap, HashSet};

use crate::catalog::ComponentCatalog;

/// Read-only, direct-edge dependency graph.
#[derive(Debug, Default)]
pub struct DependencyGraph<'a> {
    /// Outgoing edges in declaration order.
    edges: HashMap<&'a str, Vec<&'a str>>,
    /// Same edges as a set, for membership tests.
    lookup: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> DependencyGraph<'a> {
    /// Builds the graph from every catalog component's references.
    #[must_use]
    pub fn new(catalog: &'a dyn ComponentCatalog) -> Self {
        let mut edges = HashMap::new();
        let mut lookup = HashMap::new();

        for component in catalog.list_components() {
            let targets: Vec<&str> = component
                .dependencies
                .iter()
                .map(String::as_str)
                .collect();
            lookup.insert(component.id.as_str(), targets.iter().copied().collect());
            edges.insert(component.id.as_str(), targets);
        }

        Self { edges, lookup }
    }

    /// Direct dependencies of `component`, in declaration order.
    #[must_use]
    pub fn dependencies(&self, component: &str) -> &[&'a str] {
        match self.edges.get(component) {
            Some(targets) => targets,
            None => &[],
        }
    }

    /// Whether `component` directly depends on `target`.
    #[must_use]
    pub fn depends_on(&self, component: &str, target: &str) -> bool {
        self.lookup
            .get(component)
            .is_some_and(|set| set.contains(target))
    }

    /// Whether `component` directly depends on any of `targets`.
    pub fn depends_on_any<'t, I>(&self, component: &str, targets: I) -> bool
    where
        I: IntoIterator<Item = &'t str>,
    {
        targets
            .into_iter()
            .any(|target| self.depends_on(component, target))
    }

    /// Dependencies of `component` that are members of `targets`.
    ///
    /// Returned in `component`'s declaration order, so diagnostics are stable.
    #[must_use]
    pub fn edges_into(&self, component: &str, targets: &HashSet<&str>) -> Vec<&'a str> {
        self.edges_matching(component, |target| targets.contains(target))
    }

    /// Dependencies of `component` accepted by `predicate`, in declaration order.
    pub fn edges_matching<F>(&self, component: &str, predicate: F) -> Vec<&'a str>
    where
        F: Fn(&str) -> bool,
    {
        self.dependencies(component)
            .iter()
            .copied()
            .filter(|target| predicate(target))
            .collect()
    }

    /// Number of components with an entry in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::component::Component;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![
            Component::new("Root.Modules.A.Api")
                .depends_on("Root.Modules.A.Application")
                .depends_on("Root.Modules.A.Domain"),
            Component::new("Root.Modules.A.Application").depends_on("Root.Modules.A.Domain"),
            Component::new("Root.Modules.A.Domain"),
        ])
    }

    #[test]
    fn direct_edges_only() {
        let catalog = catalog();
        let graph = DependencyGraph::new(&catalog);
        assert!(graph.depends_on("Root.Modules.A.Application", "Root.Modules.A.Domain"));
        assert!(!graph.depends_on("Root.Modules.A.Domain", "Root.Modules.A.Application"));
        // no transitive closure
        let catalog = CatalogSnapshot::new(vec![
            Component::new("X").depends_on("Y"),
            Component::new("Y").depends_on("Z"),
        ]);
        let graph = DependencyGraph::new(&catalog);
        assert!(!graph.depends_on("X", "Z"));
    }

    #[test]
    fn depends_on_any_and_edges_into() {
        let catalog = catalog();
        let graph = DependencyGraph::new(&catalog);
        let targets: HashSet<&str> = ["Root.Modules.A.Domain", "Root.Other"].into_iter().collect();

        assert!(graph.depends_on_any("Root.Modules.A.Api", targets.iter().copied()));
        assert!(!graph.depends_on_any("Root.Modules.A.Domain", targets.iter().copied()));
        assert_eq!(
            graph.edges_into("Root.Modules.A.Api", &targets),
            ["Root.Modules.A.Domain"]
        );
    }

    #[test]
    fn unknown_component_has_no_edges() {
        let catalog = catalog();
        let graph = DependencyGraph::new(&catalog);
        assert!(graph.dependencies("missing").is_empty());
        assert!(!graph.depends_on("missing", "Root.Modules.A.Domain"));
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }
}
