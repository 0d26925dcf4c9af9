//! Table-driven "A must not depend on B" rules.
//!
//! A [`DependencyRule`] pairs a subject [`Selector`] with a list of forbidden
//! target selectors. Building-block selectors resolve to nothing when the
//! slot is absent; a rule whose subject, or all of whose targets, are absent
//! building blocks is skipped.

use arch_fit_core::{ArchRule, ArchitectureModel, Layer, RuleContext, Severity, Verdict, Violation};
use std::collections::HashSet;
use std::fmt;

/// A set of components picked out of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Every component classified into the layer, building blocks included.
    Layer(Layer),
    /// The building block of the layer, if present.
    BuildingBlock(Layer),
    /// Every production component not classified into the layer.
    AllExcept(Layer),
}

impl Selector {
    /// Resolves to component identifiers. `None` means an absent building block.
    #[must_use]
    pub fn resolve(self, model: &ArchitectureModel) -> Option<Vec<&str>> {
        match self {
            Self::Layer(layer) => Some(model.layer(layer).iter().map(String::as_str).collect()),
            Self::BuildingBlock(layer) => model.building_blocks().slot(layer).map(|id| vec![id]),
            Self::AllExcept(layer) => Some(
                model
                    .all()
                    .iter()
                    .filter(|id| model.role(id).is_some_and(|r| r.layer != layer))
                    .map(String::as_str)
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer(layer) => write!(f, "{layer}"),
            Self::BuildingBlock(layer) => write!(f, "BuildingBlocks.{layer}"),
            Self::AllExcept(layer) => write!(f, "non-{layer}"),
        }
    }
}

/// Forbids direct edges from `subjects` to any of `forbidden`.
#[derive(Debug, Clone)]
pub struct DependencyRule {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    subjects: Selector,
    forbidden: &'static [Selector],
    severity: Severity,
}

impl DependencyRule {
    /// Creates a rule at error severity.
    #[must_use]
    pub const fn new(
        code: &'static str,
        name: &'static str,
        description: &'static str,
        subjects: Selector,
        forbidden: &'static [Selector],
    ) -> Self {
        Self {
            code,
            name,
            description,
            subjects,
            forbidden,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Subject selector.
    #[must_use]
    pub fn subjects(&self) -> Selector {
        self.subjects
    }

    /// Forbidden target selectors.
    #[must_use]
    pub fn forbidden(&self) -> &'static [Selector] {
        self.forbidden
    }
}

impl ArchRule for DependencyRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let Some(subjects) = self.subjects.resolve(ctx.model) else {
            return self.skipped(format!("{} not found", self.subjects));
        };

        let resolved: Vec<Vec<&str>> = self
            .forbidden
            .iter()
            .filter_map(|s| s.resolve(ctx.model))
            .collect();
        if resolved.is_empty() {
            let absent: Vec<String> = self.forbidden.iter().map(ToString::to_string).collect();
            return self.skipped(format!("{} not found", absent.join(", ")));
        }
        let targets: HashSet<&str> = resolved.into_iter().flatten().collect();

        let violations = subjects.into_iter().flat_map(|subject| {
            ctx.graph
                .edges_into(subject, &targets)
                .into_iter()
                .map(move |target| Violation::edge(subject, target))
        });
        self.verdict(violations)
    }
}
