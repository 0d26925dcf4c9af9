//! Persistence-context placement rules.
//!
//! A persistence context is a concrete class that is-a (transitively) the
//! configured base type, `DbContext` by default. Contexts belong in
//! Infrastructure, and a module's context in that module's Infrastructure.

use crate::hierarchy::TypeHierarchy;
use arch_fit_core::{ArchRule, Layer, RuleContext, Severity, TypeDecl, Verdict, Violation};

/// Concrete persistence contexts declared by `component`, as fully qualified names.
fn contexts_in(ctx: &RuleContext<'_>, hierarchy: &TypeHierarchy<'_>, component: &str) -> Vec<String> {
    let base = ctx.config.persistence.context_base.as_str();
    ctx.types(component)
        .iter()
        .filter(|ty| ty.is_concrete_class() && hierarchy.is_a(ty, base))
        .map(TypeDecl::full_name)
        .collect()
}

/// Rule code for persistence-context-in-infrastructure.
pub const CONTEXT_IN_INFRASTRUCTURE_CODE: &str = "AF501";

/// Rule name for persistence-context-in-infrastructure.
pub const CONTEXT_IN_INFRASTRUCTURE_NAME: &str = "persistence-context-in-infrastructure";

/// No production component outside Infrastructure declares a persistence context.
///
/// Covers every non-Infrastructure layer and unclassified components such
/// as a host.
#[derive(Debug, Clone)]
pub struct PersistenceContextInInfrastructure {
    /// Severity level.
    pub severity: Severity,
}

impl Default for PersistenceContextInInfrastructure {
    fn default() -> Self {
        Self::new()
    }
}

impl PersistenceContextInInfrastructure {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ArchRule for PersistenceContextInInfrastructure {
    fn name(&self) -> &'static str {
        CONTEXT_IN_INFRASTRUCTURE_NAME
    }

    fn code(&self) -> &'static str {
        CONTEXT_IN_INFRASTRUCTURE_CODE
    }

    fn description(&self) -> &'static str {
        "Persistence contexts must only be declared in Infrastructure components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let hierarchy = TypeHierarchy::new(ctx.catalog);
        let base = &ctx.config.persistence.context_base;

        let violations = ctx
            .model
            .all()
            .iter()
            .filter(|id| {
                ctx.model
                    .role(id)
                    .is_some_and(|r| r.layer != Layer::Infrastructure)
            })
            .flat_map(|component| {
                contexts_in(ctx, &hierarchy, component)
                    .into_iter()
                    .map(move |context| {
                        Violation::structural(
                            component.as_str(),
                            format!("{component} declares {base} type {context} outside Infrastructure"),
                        )
                    })
            })
            .collect::<Vec<_>>();

        self.verdict(violations)
    }
}

/// Rule code for module-persistence-context-placement.
pub const MODULE_CONTEXT_PLACEMENT_CODE: &str = "AF502";

/// Rule name for module-persistence-context-placement.
pub const MODULE_CONTEXT_PLACEMENT_NAME: &str = "module-persistence-context-placement";

/// When a module's Infrastructure owns a persistence context, no other
/// component of that module declares one.
#[derive(Debug, Clone)]
pub struct ModulePersistenceContextPlacement {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ModulePersistenceContextPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl ModulePersistenceContextPlacement {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ArchRule for ModulePersistenceContextPlacement {
    fn name(&self) -> &'static str {
        MODULE_CONTEXT_PLACEMENT_NAME
    }

    fn code(&self) -> &'static str {
        MODULE_CONTEXT_PLACEMENT_CODE
    }

    fn description(&self) -> &'static str {
        "A module's persistence context must live only in that module's Infrastructure"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let hierarchy = TypeHierarchy::new(ctx.catalog);
        let base = &ctx.config.persistence.context_base;
        let mut violations = Vec::new();

        for module in ctx.model.modules() {
            let Some(infrastructure) = module.infrastructure.as_deref() else {
                continue;
            };
            if contexts_in(ctx, &hierarchy, infrastructure).is_empty() {
                continue;
            }

            for component in module.components().filter(|c| *c != infrastructure) {
                for context in contexts_in(ctx, &hierarchy, component) {
                    violations.push(Violation::structural(
                        component,
                        format!(
                            "{component} declares {base} type {context} for module '{}'; it must live in {infrastructure}",
                            module.name
                        ),
                    ));
                }
            }
        }

        self.verdict(violations)
    }
}
