//! Forbidden external libraries per layer.
//!
//! The forbidden prefixes come from the `[forbidden-libraries]` config
//! section. A reference matches a prefix when it equals it or is namespaced
//! under it: `Microsoft.EntityFrameworkCore` forbids
//! `Microsoft.EntityFrameworkCore.SqlServer` but not
//! `Microsoft.EntityFrameworkCoreExtras`.

use arch_fit_core::{ArchRule, Layer, RuleContext, Severity, Verdict, Violation};

/// Rule code for forbidden-libraries.
pub const CODE: &str = "AF601";

/// Rule name for forbidden-libraries.
pub const NAME: &str = "forbidden-libraries";

/// Whether `reference` is `prefix` or lives under `prefix.`.
#[must_use]
pub fn matches_library(reference: &str, prefix: &str) -> bool {
    reference
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Components of a layer must not reference the layer's forbidden libraries.
#[derive(Debug, Clone)]
pub struct NoForbiddenLibraries {
    /// Severity level.
    pub severity: Severity,
}

impl Default for NoForbiddenLibraries {
    fn default() -> Self {
        Self::new()
    }
}

impl NoForbiddenLibraries {
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

impl ArchRule for NoForbiddenLibraries {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Layers must not reference their forbidden external libraries"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let mut violations = Vec::new();

        for layer in Layer::KNOWN {
            let forbidden = ctx.config.forbidden_libraries.for_layer(layer);
            if forbidden.is_empty() {
                continue;
            }

            for component in ctx.model.layer(layer) {
                let hits = ctx.graph.edges_matching(component, |target| {
                    forbidden.iter().any(|prefix| matches_library(target, prefix))
                });
                violations.extend(hits.into_iter().map(|t| Violation::edge(component.as_str(), t)));
            }
        }

        self.verdict(violations)
    }
}
