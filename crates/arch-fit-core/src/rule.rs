//! Rule trait for defining architecture rules.

use crate::context::RuleContext;
use crate::types::{Severity, Verdict, Violation};

/// An architecture rule evaluated against the model and dependency graph.
///
/// Rules are pure: they read the [`RuleContext`] and return a [`Verdict`].
/// They never mutate shared state, so evaluation order does not matter.
///
/// # Example
///
/// ```ignore
/// use arch_fit_core::{ArchRule, Layer, RuleContext, Verdict, Violation};
///
/// pub struct NoHostReferences;
///
/// impl ArchRule for NoHostReferences {
///     fn name(&self) -> &'static str { "no-host-references" }
///     fn code(&self) -> &'static str { "X001" }
///
///     fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
///         let host = format!("{}.Host", ctx.root_prefix());
///         let violations = ctx
///             .model
///             .layer(Layer::Domain)
///             .iter()
///             .filter(|c| ctx.graph.depends_on(c, &host))
///             .map(|c| Violation::edge(c.as_str(), host.as_str()));
///         self.verdict(violations)
///     }
/// }
/// ```
pub trait ArchRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "module-isolation").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "AF301").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Evaluates the rule.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict;

    /// Builds a verdict carrying this rule's identity.
    fn verdict(&self, violations: impl IntoIterator<Item = Violation>) -> Verdict
    where
        Self: Sized,
    {
        Verdict::new(self.code(), self.name(), self.default_severity()).with_violations(violations)
    }

    /// Builds a skipped verdict carrying this rule's identity.
    fn skipped(&self, reason: impl Into<String>) -> Verdict
    where
        Self: Sized,
    {
        Verdict::new(self.code(), self.name(), self.default_severity()).skip(reason)
    }
}

/// Type alias for boxed `ArchRule` trait objects.
pub type RuleBox = Box<dyn ArchRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl ArchRule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn evaluate(&self, _ctx: &RuleContext<'_>) -> Verdict {
            self.verdict([Violation::structural("Root.A", "Test violation")])
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
    }

    #[test]
    fn test_verdict_helpers() {
        let rule = TestRule;
        let verdict = rule.verdict([Violation::edge("A", "B")]);
        assert_eq!(verdict.code, "TEST001");
        assert_eq!(verdict.rule, "test-rule");
        assert!(!verdict.passed());

        let skipped = rule.skipped("nothing to check");
        assert!(skipped.passed());
        assert_eq!(skipped.skipped.as_deref(), Some("nothing to check"));
    }
}
