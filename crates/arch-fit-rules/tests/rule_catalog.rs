//! Integration test: the full rule catalog over an in-memory modular monolith.

use arch_fit_core::{
    CatalogSnapshot, CheckReport, Component, Config, Evaluator, Severity, TypeDecl,
};
use arch_fit_rules::all_rules;

const ROOT: &str = "Shop";

fn id(suffix: &str) -> String {
    format!("{ROOT}.{suffix}")
}

/// A conforming system: two modules, four building blocks, a host and tests.
fn clean_system() -> Vec<Component> {
    vec![
        Component::new(id("BuildingBlocks.Domain"))
            .declares(TypeDecl::class("Entity").abstract_()),
        Component::new(id("BuildingBlocks.Application"))
            .depends_on(id("BuildingBlocks.Domain"))
            .declares(TypeDecl::interface("IReadRepository`1")),
        Component::new(id("BuildingBlocks.Infrastructure"))
            .depends_on(id("BuildingBlocks.Application"))
            .depends_on("Microsoft.EntityFrameworkCore"),
        Component::new(id("BuildingBlocks.Api"))
            .depends_on(id("BuildingBlocks.Application"))
            .depends_on("Microsoft.AspNetCore.Mvc"),
        Component::new(id("Modules.Customers.Domain"))
            .depends_on(id("BuildingBlocks.Domain"))
            .declares(TypeDecl::class("Customer").with_base("Entity"))
            .declares(TypeDecl::interface("ICustomerRepository")),
        Component::new(id("Modules.Customers.Application"))
            .depends_on(id("Modules.Customers.Domain"))
            .depends_on(id("BuildingBlocks.Application"))
            .declares(TypeDecl::interface("IEmailClient")),
        Component::new(id("Modules.Customers.Infrastructure"))
            .depends_on(id("Modules.Customers.Application"))
            .depends_on(id("Modules.Customers.Domain"))
            .depends_on(id("BuildingBlocks.Infrastructure"))
            .depends_on("Microsoft.EntityFrameworkCore.SqlServer")
            .declares(
                TypeDecl::class("CustomersDbContext")
                    .in_namespace("Shop.Modules.Customers.Infrastructure.Persistence")
                    .with_base("Microsoft.EntityFrameworkCore.DbContext"),
            )
            .declares(TypeDecl::class("CustomerRepository").with_base("ICustomerRepository"))
            .declares(TypeDecl::class("EmailClient").with_base("IEmailClient")),
        Component::new(id("Modules.Customers.RestApi"))
            .depends_on(id("Modules.Customers.Application"))
            .depends_on(id("BuildingBlocks.Api")),
        Component::new(id("Modules.Orders.Domain")).depends_on(id("BuildingBlocks.Domain")),
        Component::new(id("Modules.Orders.Application"))
            .depends_on(id("Modules.Orders.Domain"))
            .declares(TypeDecl::interface("IOrderRepository")),
        Component::new(id("Modules.Orders.Infrastructure"))
            .depends_on(id("Modules.Orders.Application"))
            .declares(TypeDecl::class("OrderRepository").with_base("IOrderRepository")),
        Component::new(id("Modules.Orders.Api")).depends_on(id("Modules.Orders.Application")),
        Component::new(id("Host"))
            .depends_on(id("Modules.Customers.RestApi"))
            .depends_on(id("Modules.Orders.Api")),
        Component::new(id("ArchTests"))
            .tooling(true)
            .depends_on(id("Modules.Orders.Domain"))
            .declares(TypeDecl::class("FakeRepository")),
    ]
}

fn evaluate(components: Vec<Component>) -> CheckReport {
    let evaluator = Evaluator::builder()
        .config(Config::new().with_root_prefix(ROOT))
        .rules(all_rules())
        .build()
        .expect("evaluator should build");
    evaluator.evaluate(&CatalogSnapshot::new(components))
}

fn replace(components: &mut [Component], replacement: Component) {
    let slot = components
        .iter_mut()
        .find(|c| c.id == replacement.id)
        .expect("component to replace exists");
    *slot = replacement;
}

fn failing_codes(report: &CheckReport) -> Vec<&str> {
    report
        .failed()
        .into_iter()
        .map(|v| v.code.as_str())
        .collect()
}

#[test]
fn clean_system_passes_every_rule() {
    let report = evaluate(clean_system());

    assert!(
        report.failed().is_empty(),
        "{}",
        report.format_test_report(Severity::Info)
    );
    assert_eq!(report.verdicts.len(), 23);
    assert_eq!(report.components_checked, 13);
    assert!(report.discovery_errors.is_empty());
    assert!(report.verdicts.iter().all(|v| !v.is_skipped()));
}

#[test]
fn cross_module_reference_fails_isolation_only() {
    let mut system = clean_system();
    replace(
        &mut system,
        Component::new(id("Modules.Orders.Application"))
            .depends_on(id("Modules.Orders.Domain"))
            .depends_on(id("Modules.Customers.Domain"))
            .declares(TypeDecl::interface("IOrderRepository")),
    );

    let report = evaluate(system);

    assert_eq!(failing_codes(&report), ["AF301"]);
    assert_eq!(
        report.failed()[0].messages(),
        ["Shop.Modules.Orders.Application -> Shop.Modules.Customers.Domain"]
    );
}

#[test]
fn leaky_layers_fail_several_rules() {
    let mut system = clean_system();
    replace(
        &mut system,
        Component::new(id("Modules.Orders.Domain"))
            .depends_on(id("BuildingBlocks.Domain"))
            .depends_on(id("Modules.Orders.Infrastructure"))
            .depends_on("MediatR")
            .declares(
                TypeDecl::class("OrdersDbContext")
                    .in_namespace("Shop.Modules.Orders.Domain")
                    .with_base("DbContext"),
            ),
    );

    let report = evaluate(system);

    assert_eq!(failing_codes(&report), ["AF104", "AF501", "AF601"]);
    let persistence = report
        .verdicts
        .iter()
        .find(|v| v.code == "AF501")
        .expect("AF501 verdict");
    assert!(persistence.messages()[0].contains("Shop.Modules.Orders.Domain.OrdersDbContext"));
}

#[test]
fn missing_port_and_class_port() {
    let mut system = clean_system();
    replace(
        &mut system,
        Component::new(id("Modules.Orders.Application"))
            .depends_on(id("Modules.Orders.Domain"))
            .declares(TypeDecl::class("OrderRepository")),
    );

    let report = evaluate(system);

    assert_eq!(failing_codes(&report), ["AF401", "AF403"]);
    let adapters = report.failed()[1];
    assert!(adapters.messages()[0].contains("but it was not found"));
}

#[test]
fn system_without_building_blocks_skips_their_rules() {
    let system: Vec<Component> = clean_system()
        .into_iter()
        .filter(|c| !c.id.contains(".BuildingBlocks."))
        .collect();

    let report = evaluate(system);

    assert!(report.passed());
    let skipped: Vec<&str> = report
        .verdicts
        .iter()
        .filter(|v| v.is_skipped())
        .map(|v| v.code.as_str())
        .collect();
    assert_eq!(
        skipped,
        ["AF108", "AF109", "AF201", "AF202", "AF203", "AF204", "AF205", "AF206", "AF302"]
    );
}

#[test]
fn competing_api_aliases_are_reported_not_fatal() {
    let mut system = clean_system();
    system.push(Component::new(id("Modules.Orders.GraphQL")));

    let report = evaluate(system);

    assert!(report.passed());
    assert_eq!(report.discovery_errors.len(), 1);
    assert!(report.discovery_errors[0]
        .to_string()
        .contains("ignored `Shop.Modules.Orders.GraphQL`"));
}
