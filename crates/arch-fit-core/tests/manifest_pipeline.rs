//! Integration test: manifests on disk end-to-end via Evaluator.
//!
//! Writes component manifests into a temporary directory and verifies that
//! the loader -> classifier -> model -> rule -> report pipeline behaves.

use arch_fit_core::{
    ArchRule, Config, DiscoveryError, Evaluator, Layer, RuleContext, Severity, Verdict, Violation,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Every Api component must stay away from every Domain component.
struct ApiAvoidsDomain;

impl ArchRule for ApiAvoidsDomain {
    fn name(&self) -> &'static str {
        "api-avoids-domain"
    }
    fn code(&self) -> &'static str {
        "T100"
    }
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let domain = ctx.model.layer_names(Layer::Domain);
        let violations: Vec<Violation> = ctx
            .model
            .layer(Layer::Api)
            .iter()
            .flat_map(|api| {
                ctx.graph
                    .edges_into(api, &domain)
                    .into_iter()
                    .map(move |target| Violation::edge(api.as_str(), target))
            })
            .collect();
        self.verdict(violations)
    }
}

fn write_manifest(dir: &Path, name: &str, references: &[&str]) {
    let manifest = serde_json::json!({ "name": name, "references": references });
    fs::write(
        dir.join(format!("{name}.component.json")),
        serde_json::to_string_pretty(&manifest).expect("manifest serializes"),
    )
    .expect("manifest written");
}

fn evaluator() -> Evaluator {
    Evaluator::builder()
        .config(
            Config::new()
                .with_root_prefix("Shop")
                .with_search_paths(["artifacts"]),
        )
        .rule(ApiAvoidsDomain)
        .build()
        .expect("evaluator should build")
}

#[test]
fn detects_forbidden_edge_from_manifests() {
    let tmp = TempDir::new().expect("tempdir");
    let artifacts = tmp.path().join("artifacts");
    fs::create_dir_all(&artifacts).expect("artifacts dir");

    write_manifest(
        &artifacts,
        "Shop.Modules.Billing.Api",
        &["Shop.Modules.Billing.Domain", "Shop.Modules.Billing.Application"],
    );
    write_manifest(&artifacts, "Shop.Modules.Billing.Application", &[]);
    write_manifest(&artifacts, "Shop.Modules.Billing.Domain", &[]);
    write_manifest(&artifacts, "Shop.ArchTests", &["Shop.Modules.Billing.Domain"]);

    let report = evaluator().run(tmp.path()).expect("run should succeed");

    assert_eq!(report.components_checked, 3, "tooling is excluded");
    assert!(report.discovery_errors.is_empty());
    assert_eq!(
        report.verdicts[0].messages(),
        ["Shop.Modules.Billing.Api -> Shop.Modules.Billing.Domain"]
    );
    assert!(report.has_failures_at(Severity::Error));

    let text = report.format_test_report(Severity::Error);
    assert!(text.contains("api-avoids-domain [T100] error"));
}

#[test]
fn broken_manifest_does_not_abort_the_run() {
    let tmp = TempDir::new().expect("tempdir");
    let artifacts = tmp.path().join("artifacts");
    fs::create_dir_all(&artifacts).expect("artifacts dir");

    write_manifest(&artifacts, "Shop.Modules.Billing.Api", &[]);
    fs::write(artifacts.join("Shop.Broken.component.json"), "{").expect("write");

    let report = evaluator().run(tmp.path()).expect("run should succeed");

    assert!(report.passed());
    assert_eq!(report.components_checked, 1);
    assert!(matches!(
        report.discovery_errors.as_slice(),
        [DiscoveryError::InvalidManifest { .. }]
    ));
}

#[test]
fn empty_scope_passes() {
    let tmp = TempDir::new().expect("tempdir");
    fs::create_dir_all(tmp.path().join("artifacts")).expect("artifacts dir");

    let report = evaluator().run(tmp.path()).expect("run should succeed");

    assert!(report.passed());
    assert_eq!(report.components_checked, 0);
    assert!(report.verdicts[0].passed());
}
