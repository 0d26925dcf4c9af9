//! Context types for rule evaluation.

use crate::catalog::ComponentCatalog;
use crate::component::TypeDecl;
use crate::config::Config;
use crate::graph::DependencyGraph;
use crate::model::ArchitectureModel;

/// Everything a rule may read. Shared by reference across all rules of a run.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    /// Classified, grouped components.
    pub model: &'a ArchitectureModel,
    /// Direct dependency edges.
    pub graph: &'a DependencyGraph<'a>,
    /// Type declarations and raw components.
    pub catalog: &'a dyn ComponentCatalog,
    /// Run configuration.
    pub config: &'a Config,
}

impl<'a> RuleContext<'a> {
    /// Creates a new rule context.
    #[must_use]
    pub fn new(
        model: &'a ArchitectureModel,
        graph: &'a DependencyGraph<'a>,
        catalog: &'a dyn ComponentCatalog,
        config: &'a Config,
    ) -> Self {
        Self {
            model,
            graph,
            catalog,
            config,
        }
    }

    /// Root prefix of the checked system.
    #[must_use]
    pub fn root_prefix(&self) -> &'a str {
        self.model.root_prefix()
    }

    /// Types declared by a component.
    #[must_use]
    pub fn types(&self, component: &str) -> &'a [TypeDecl] {
        self.catalog.list_types(component)
    }

    /// `(component, type)` pairs for every type declared by `components`.
    pub fn types_in<'c, I>(&self, components: I) -> Vec<(&'c str, &'a TypeDecl)>
    where
        I: IntoIterator<Item = &'c str>,
    {
        components
            .into_iter()
            .flat_map(|c| self.types(c).iter().map(move |t| (c, t)))
            .collect()
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("root_prefix", &self.model.root_prefix())
            .field("components", &self.model.all().len())
            .finish_non_exhaustive()
    }
}
