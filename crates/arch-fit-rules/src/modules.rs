//! Module isolation rules.
//!
//! Modules (`{root}.Modules.{Name}.*`) talk to each other only through
//! building blocks or out-of-process contracts, never by direct reference.

use arch_fit_core::{modules_token, ArchRule, RuleContext, Severity, Verdict, Violation};
use std::collections::HashSet;

/// Rule code for module-isolation.
pub const MODULE_ISOLATION_CODE: &str = "AF301";

/// Rule name for module-isolation.
pub const MODULE_ISOLATION_NAME: &str = "module-isolation";

/// No module component depends on another module's components.
///
/// Building blocks are exempt: every module may use them.
#[derive(Debug, Clone)]
pub struct ModuleIsolation {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ModuleIsolation {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleIsolation {
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

impl ArchRule for ModuleIsolation {
    fn name(&self) -> &'static str {
        MODULE_ISOLATION_NAME
    }

    fn code(&self) -> &'static str {
        MODULE_ISOLATION_CODE
    }

    fn description(&self) -> &'static str {
        "Module components must not depend on other modules' components"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let modules = ctx.model.modules();
        let mut violations = Vec::new();

        for module in modules {
            let others: HashSet<&str> = modules
                .iter()
                .filter(|other| other.name != module.name)
                .flat_map(|other| other.components())
                .collect();

            for component in module.components() {
                violations.extend(
                    ctx.graph
                        .edges_into(component, &others)
                        .into_iter()
                        .map(|target| Violation::edge(component, target)),
                );
            }
        }

        self.verdict(violations)
    }
}

/// Rule code for building-blocks-not-depend-on-modules.
pub const BUILDING_BLOCKS_NOT_DEPEND_ON_MODULES_CODE: &str = "AF302";

/// Rule name for building-blocks-not-depend-on-modules.
pub const BUILDING_BLOCKS_NOT_DEPEND_ON_MODULES_NAME: &str =
    "building-blocks-not-depend-on-modules";

/// Building blocks never reference anything under `{root}.Modules.`.
///
/// Strict: the target need not be a discovered module component.
#[derive(Debug, Clone)]
pub struct BuildingBlocksNotDependOnModules {
    /// Severity level.
    pub severity: Severity,
}

impl Default for BuildingBlocksNotDependOnModules {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingBlocksNotDependOnModules {
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

impl ArchRule for BuildingBlocksNotDependOnModules {
    fn name(&self) -> &'static str {
        BUILDING_BLOCKS_NOT_DEPEND_ON_MODULES_NAME
    }

    fn code(&self) -> &'static str {
        BUILDING_BLOCKS_NOT_DEPEND_ON_MODULES_CODE
    }

    fn description(&self) -> &'static str {
        "Building blocks must not depend on any module component"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let building_blocks: Vec<&str> = ctx
            .model
            .all()
            .iter()
            .filter(|id| ctx.model.role(id).is_some_and(|r| r.is_building_block))
            .map(String::as_str)
            .collect();
        if building_blocks.is_empty() {
            return self.skipped("no building blocks found");
        }

        let token = modules_token(ctx.root_prefix());
        let violations = building_blocks.into_iter().flat_map(|bb| {
            ctx.graph
                .edges_matching(bb, |target| target.contains(token.as_str()))
                .into_iter()
                .map(move |target| Violation::edge(bb, target))
        });
        self.verdict(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::run;
    use arch_fit_core::Component;

    #[test]
    fn cross_module_edge_is_reported() {
        let verdict = run(
            &ModuleIsolation::new(),
            vec![
                Component::new("Root.Modules.Billing.Domain")
                    .depends_on("Root.Modules.Shipping.Infrastructure")
                    .depends_on("Root.BuildingBlocks.Domain"),
                Component::new("Root.Modules.Shipping.Infrastructure"),
                Component::new("Root.BuildingBlocks.Domain"),
            ],
        );
        assert_eq!(
            verdict.messages(),
            ["Root.Modules.Billing.Domain -> Root.Modules.Shipping.Infrastructure"]
        );
    }

    #[test]
    fn building_block_edges_are_exempt() {
        let verdict = run(
            &ModuleIsolation::new(),
            vec![
                Component::new("Root.Modules.Billing.Domain").depends_on("Root.BuildingBlocks.Domain"),
                Component::new("Root.Modules.Shipping.Domain").depends_on("Root.BuildingBlocks.Domain"),
                Component::new("Root.BuildingBlocks.Domain"),
            ],
        );
        assert!(verdict.passed());
    }

    #[test]
    fn intra_module_edges_are_fine() {
        let verdict = run(
            &ModuleIsolation::new(),
            vec![
                Component::new("Root.Modules.Billing.Api")
                    .depends_on("Root.Modules.Billing.Application"),
                Component::new("Root.Modules.Billing.Application"),
            ],
        );
        assert!(verdict.passed());
        assert!(!verdict.is_skipped());
    }

    #[test]
    fn every_offending_edge_is_listed_in_module_order() {
        let verdict = run(
            &ModuleIsolation::new(),
            vec![
                Component::new("Root.Modules.B.Api").depends_on("Root.Modules.A.Domain"),
                Component::new("Root.Modules.A.Domain"),
                Component::new("Root.Modules.A.Application")
                    .depends_on("Root.Modules.B.Api")
                    .depends_on("Root.Modules.A.Domain"),
            ],
        );
        assert_eq!(
            verdict.messages(),
            [
                "Root.Modules.A.Application -> Root.Modules.B.Api",
                "Root.Modules.B.Api -> Root.Modules.A.Domain",
            ]
        );
    }

    #[test]
    fn building_block_referencing_undiscovered_module() {
        let verdict = run(
            &BuildingBlocksNotDependOnModules::new(),
            vec![Component::new("Root.BuildingBlocks.Application")
                .depends_on("Root.Modules.Ghost.Domain")
                .depends_on("Root.BuildingBlocks.Domain")],
        );
        assert_eq!(
            verdict.messages(),
            ["Root.BuildingBlocks.Application -> Root.Modules.Ghost.Domain"]
        );
    }

    #[test]
    fn no_building_blocks_is_skipped() {
        let verdict = run(
            &BuildingBlocksNotDependOnModules::new(),
            vec![Component::new("Root.Modules.A.Domain")],
        );
        assert!(verdict.is_skipped());
        assert!(verdict.passed());
    }
}
