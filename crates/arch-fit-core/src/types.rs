//! Core types for rule verdicts and check reports.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::DiscoveryError;

/// Severity level of a failing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, never fails a run.
    Info,
    /// Should be addressed.
    Warning,
    /// Must be fixed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One offending component or type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Offending component (or the component declaring the offending type).
    pub subject: String,
    /// Forbidden dependency target, for edge violations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Human-readable diagnostic.
    pub message: String,
}

impl Violation {
    /// A forbidden dependency edge, rendered `"{source} -> {target}"`.
    #[must_use]
    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            message: format!("{source} -> {target}"),
            subject: source,
            target: Some(target),
        }
    }

    /// A structural violation with a free-form message.
    #[must_use]
    pub fn structural(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            target: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of evaluating one rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Rule code (e.g., "AF101").
    pub code: String,
    /// Rule name (e.g., "api-not-depend-on-domain").
    pub rule: String,
    /// Severity applied when the rule fails.
    pub severity: Severity,
    /// Why the rule did not apply, when it was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    /// Offending entities, deduplicated, in discovery order.
    pub violations: Vec<Violation>,
}

impl Verdict {
    /// Creates a passing verdict.
    #[must_use]
    pub fn new(code: impl Into<String>, rule: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            skipped: None,
            violations: Vec::new(),
        }
    }

    /// Marks the rule as vacuously satisfied.
    #[must_use]
    pub fn skip(mut self, reason: impl Into<String>) -> Self {
        self.skipped = Some(reason.into());
        self
    }

    /// Sets the violations, dropping duplicates but keeping first-seen order.
    #[must_use]
    pub fn with_violations(mut self, violations: impl IntoIterator<Item = Violation>) -> Self {
        let mut seen = HashSet::new();
        self.violations = violations
            .into_iter()
            .filter(|v| seen.insert(v.message.clone()))
            .collect();
        self
    }

    /// True when there are no violations.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when the rule was skipped.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// Whether this verdict fails a run with the given threshold.
    #[must_use]
    pub fn fails_at(&self, threshold: Severity) -> bool {
        !self.passed() && self.severity >= threshold
    }

    /// Violation messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.message.as_str()).collect()
    }

    /// Formats the verdict for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let status = if let Some(reason) = &self.skipped {
            format!("skipped ({reason})")
        } else if self.passed() {
            "passed".to_string()
        } else {
            format!("{}: {} violation(s)", self.severity, self.violations.len())
        };
        let mut output = format!("{} {} {}\n", self.code, self.rule, status);
        for v in &self.violations {
            let _ = writeln!(output, "  {v}");
        }
        output
    }
}

/// Result of a whole check run.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// One verdict per evaluated rule, in registration order.
    pub verdicts: Vec<Verdict>,
    /// Soft discovery failures.
    pub discovery_errors: Vec<DiscoveryError>,
    /// Number of production components in the model.
    pub components_checked: usize,
}

impl CheckReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdicts that failed, regardless of severity.
    #[must_use]
    pub fn failed(&self) -> Vec<&Verdict> {
        self.verdicts.iter().filter(|v| !v.passed()).collect()
    }

    /// Whether any verdict fails at or above `threshold`.
    #[must_use]
    pub fn has_failures_at(&self, threshold: Severity) -> bool {
        self.verdicts.iter().any(|v| v.fails_at(threshold))
    }

    /// True when every verdict at error severity passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.has_failures_at(Severity::Error)
    }

    /// Counts (passed, failed, skipped) verdicts. Skipped ones are also passed.
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        let failed = self.verdicts.iter().filter(|v| !v.passed()).count();
        let skipped = self.verdicts.iter().filter(|v| v.is_skipped()).count();
        (self.verdicts.len() - failed, failed, skipped)
    }

    /// Total number of violations across verdicts.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.verdicts.iter().map(|v| v.violations.len()).sum()
    }

    /// Formats failing verdicts as a test failure report.
    ///
    /// Produces a multi-line report suitable for `panic!()` messages in
    /// `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Verdict> = self
            .verdicts
            .iter()
            .filter(|v| v.fails_at(fail_on))
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== arch-fit: {} failing rule(s) ===\n",
            failing.len()
        );

        for v in &failing {
            let _ = writeln!(report, "{} [{}] {}", v.rule, v.code, v.severity);
            for violation in &v.violations {
                let _ = writeln!(report, "  {violation}");
            }
            let _ = writeln!(report);
        }

        if !self.discovery_errors.is_empty() {
            let _ = writeln!(report, "Discovery errors:");
            for e in &self.discovery_errors {
                let _ = writeln!(report, "  {e}");
            }
            let _ = writeln!(report);
        }

        let (passed, failed, skipped) = self.counts();
        let _ = writeln!(
            report,
            "Total: {passed} passed ({skipped} skipped), {failed} failed, {} violation(s) in {} component(s)",
            self.violation_count(),
            self.components_checked
        );

        report
    }

    /// Adds verdicts and errors from another report.
    pub fn extend(&mut self, other: Self) {
        self.verdicts.extend(other.verdicts);
        self.discovery_errors.extend(other.discovery_errors);
        self.components_checked = self.components_checked.max(other.components_checked);
    }
}
