//! Shared output formatting for check reports.

use anyhow::Result;
use arch_fit_core::{CheckReport, DiscoveryError, Severity, Verdict};
use miette::{GraphicalReportHandler, GraphicalTheme};

use crate::OutputFormat;

/// Print a check report in the specified format.
pub fn print(report: &CheckReport, format: OutputFormat, fail_on: Severity) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, fail_on),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(report: &CheckReport, fail_on: Severity) {
    for verdict in report.verdicts.iter().filter(|v| !v.passed()) {
        print_verdict(verdict);
    }

    for verdict in report.verdicts.iter().filter(|v| v.is_skipped()) {
        tracing::debug!(
            "{} {} skipped: {}",
            verdict.code,
            verdict.rule,
            verdict.skipped.as_deref().unwrap_or_default()
        );
    }

    for error in &report.discovery_errors {
        eprintln!("{}", render_diagnostic(error));
    }

    let (passed, failed, skipped) = report.counts();
    let summary_color = if report.has_failures_at(fail_on) {
        "\x1b[31m"
    } else if failed > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}{} rule(s) passed ({} skipped), {} failed with {} violation(s) in {} component(s)\x1b[0m",
        summary_color,
        passed,
        skipped,
        failed,
        report.violation_count(),
        report.components_checked
    );
}

fn print_verdict(verdict: &Verdict) {
    println!("{} {}", verdict.code, verdict.rule);
    for violation in &verdict.violations {
        println!("  {}: {}", severity_indicator(verdict.severity), violation);
    }
    println!();
}

fn render_diagnostic(error: &DiscoveryError) -> String {
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, error).is_err() {
        return format!("warning: {error}");
    }
    out
}

fn print_json(report: &CheckReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn compact_lines(report: &CheckReport) -> Vec<String> {
    let violations = report.verdicts.iter().flat_map(|verdict| {
        verdict.violations.iter().map(move |violation| {
            format!(
                "{}: {} [{}] {}",
                violation.subject, verdict.severity, verdict.code, violation.message
            )
        })
    });
    let errors = report
        .discovery_errors
        .iter()
        .map(|error| format!("discovery: {error}"));
    violations.chain(errors).collect()
}

fn print_compact(report: &CheckReport) {
    for line in compact_lines(report) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_fit_core::Violation;

    fn report() -> CheckReport {
        let mut report = CheckReport::new();
        report.verdicts.push(
            Verdict::new("AF301", "module-isolation", Severity::Warning).with_violations([
                Violation::edge("Shop.Modules.A.Domain", "Shop.Modules.B.Domain"),
            ]),
        );
        report.verdicts.push(
            Verdict::new("AF201", "building-blocks-domain-isolated", Severity::Error)
                .skip("BuildingBlocks.Domain not found"),
        );
        report.discovery_errors.push(DiscoveryError::DuplicateComponent {
            id: "Shop.Modules.A.Api".into(),
        });
        report
    }

    #[test]
    fn compact_has_one_line_per_violation_and_error() {
        assert_eq!(
            compact_lines(&report()),
            [
                "Shop.Modules.A.Domain: warning [AF301] Shop.Modules.A.Domain -> Shop.Modules.B.Domain",
                "discovery: duplicate component `Shop.Modules.A.Api`, keeping the first occurrence",
            ]
        );
    }

    #[test]
    fn diagnostic_rendering_includes_code_and_help() {
        let rendered = render_diagnostic(&DiscoveryError::DuplicateComponent {
            id: "Shop.Modules.A.Api".into(),
        });
        assert!(rendered.contains("arch_fit::discovery::duplicate_component"));
        assert!(rendered.contains("remove stale build output"));
    }

    #[test]
    fn json_report_is_serializable() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["verdicts"][0]["code"], "AF301");
        assert_eq!(value["verdicts"][1]["skipped"], "BuildingBlocks.Domain not found");
        assert_eq!(value["discovery_errors"][0]["kind"], "duplicate-component");
    }
}
