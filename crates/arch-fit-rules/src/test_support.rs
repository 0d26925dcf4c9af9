//! Helpers for rule unit tests.

use arch_fit_core::{
    ArchRule, ArchitectureModel, CatalogSnapshot, Component, Config, DependencyGraph, RuleContext,
    Verdict,
};

/// Evaluates `rule` over `components` with root prefix `Root`.
pub(crate) fn run(rule: &dyn ArchRule, components: Vec<Component>) -> Verdict {
    run_with(rule, components, &Config::new().with_root_prefix("Root"))
}

/// Evaluates `rule` over `components` with the given configuration.
pub(crate) fn run_with(rule: &dyn ArchRule, components: Vec<Component>, config: &Config) -> Verdict {
    let catalog = CatalogSnapshot::new(components);
    let root = config.root_prefix().unwrap_or("Root");
    let (model, _) = ArchitectureModel::build(&catalog, root);
    let graph = DependencyGraph::new(&catalog);
    rule.evaluate(&RuleContext::new(&model, &graph, &catalog, config))
}
