//! Integration tests: manifest fixtures checked through the facade.

use arch_fit::rules::Preset;
use arch_fit::{evaluate_project, run_check_in, CheckReport, Config, DiscoveryError, Severity};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture_config(name: &str) -> Config {
    Config::from_file(&fixture(name).join("arch-fit.toml")).expect("fixture config parses")
}

fn evaluate(name: &str, config: Config, preset: Preset) -> CheckReport {
    evaluate_project(&fixture(name), config, preset).expect("fixture evaluates")
}

fn failing_codes(report: &CheckReport) -> Vec<&str> {
    report
        .failed()
        .into_iter()
        .map(|v| v.code.as_str())
        .collect()
}

#[test]
fn modular_monolith_passes() {
    run_check_in(
        &fixture("modular-monolith"),
        fixture_config("modular-monolith"),
        Preset::All,
    );
}

#[test]
fn modular_monolith_report() {
    let report = evaluate("modular-monolith", fixture_config("modular-monolith"), Preset::All);

    // 4 building blocks, 4 Catalog components and the host; tests and
    // foreign components are left out
    assert_eq!(report.components_checked, 9);
    assert!(report.discovery_errors.is_empty(), "{:?}", report.discovery_errors);
    assert_eq!(report.verdicts.len(), 23);
    assert!(report.verdicts.iter().all(|v| v.passed() && !v.is_skipped()));
}

#[test]
fn leaky_monolith_report() {
    let report = evaluate("leaky-monolith", fixture_config("leaky-monolith"), Preset::All);

    assert_eq!(report.components_checked, 3);
    assert_eq!(failing_codes(&report), ["AF104", "AF301", "AF403"]);

    let isolation = report.failed()[1];
    assert_eq!(
        isolation.messages(),
        ["Shop.Modules.Sales.Domain -> Shop.Modules.Billing.Domain"]
    );

    assert_eq!(report.discovery_errors.len(), 1);
    assert!(matches!(
        &report.discovery_errors[0],
        DiscoveryError::InvalidManifest { path, .. }
            if path.ends_with("Shop.Modules.Billing.Api.component.json")
    ));
}

#[test]
#[should_panic(expected = "module-isolation [AF301] error")]
fn leaky_monolith_panics_with_report() {
    run_check_in(
        &fixture("leaky-monolith"),
        fixture_config("leaky-monolith"),
        Preset::All,
    );
}

#[test]
fn presets_narrow_the_run() {
    let report = evaluate("leaky-monolith", fixture_config("leaky-monolith"), Preset::Structure);
    assert_eq!(failing_codes(&report), ["AF403"]);

    let report = evaluate(
        "leaky-monolith",
        fixture_config("leaky-monolith"),
        Preset::Dependencies,
    );
    assert_eq!(failing_codes(&report), ["AF104", "AF301"]);
}

#[test]
fn rule_overrides_from_config() {
    let config = Config::parse(
        r#"
[scope]
root_prefix = "Shop"
search_paths = ["artifacts"]

[rules.module-isolation]
severity = "warning"

[rules.domain-not-depend-on-infrastructure]
enabled = false

[rules.adapters-implement-ports]
enabled = false
"#,
    )
    .expect("config parses");

    let report = evaluate("leaky-monolith", config.clone(), Preset::All);
    assert_eq!(report.verdicts.len(), 21);
    assert_eq!(failing_codes(&report), ["AF301"]);
    assert_eq!(report.failed()[0].severity, Severity::Warning);
    assert!(report.passed());

    // warnings alone do not fail the run
    run_check_in(&fixture("leaky-monolith"), config, Preset::All);
}

#[test]
#[should_panic(expected = "module-isolation [AF301] warning")]
fn fail_on_warning() {
    let mut config = fixture_config("leaky-monolith");
    config.fail_on = Some(Severity::Warning);
    config
        .rules
        .entry("module-isolation".into())
        .or_default()
        .severity = Some(Severity::Warning);

    run_check_in(&fixture("leaky-monolith"), config, Preset::Dependencies);
}
