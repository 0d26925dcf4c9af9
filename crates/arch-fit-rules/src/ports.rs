//! Ports and adapters rules.
//!
//! Ports are the `*Repository`, `*Client` and `*Gateway` abstractions an
//! inner layer exposes. They must be interfaces, and each concrete adapter
//! `X` in Infrastructure must implement the matching port `IX`.
//!
//! # Detected Patterns
//!
//! - `class OrderRepository` declared in a Domain or Application component
//! - Infrastructure `OrderRepository` with no `IOrderRepository` anywhere
//!   in Domain/Application
//! - Infrastructure `OrderRepository` that does not list `IOrderRepository`
//!   among its bases

use crate::hierarchy::TypeHierarchy;
use arch_fit_core::{ArchRule, Layer, RuleContext, Severity, TypeDecl, Verdict, Violation};
use std::collections::HashMap;
use tracing::debug;

/// Layers where ports live.
const PORT_LAYERS: [Layer; 2] = [Layer::Domain, Layer::Application];

/// Name suffixes of repository ports.
pub const REPOSITORY_SUFFIXES: &[&str] = &["Repository"];

/// Name suffixes of client and gateway ports.
pub const CLIENT_GATEWAY_SUFFIXES: &[&str] = &["Client", "Gateway"];

/// Name suffixes of adapters in Infrastructure.
pub const ADAPTER_SUFFIXES: &[&str] = &["Repository", "Client", "Gateway"];

fn has_suffix(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s))
}

/// Types with a port suffix in Domain/Application must be interfaces.
#[derive(Debug, Clone)]
pub struct PortsAreInterfaces {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    suffixes: &'static [&'static str],
    /// Severity level.
    pub severity: Severity,
}

impl PortsAreInterfaces {
    /// AF401: `*Repository` ports.
    #[must_use]
    pub fn repositories() -> Self {
        Self {
            code: "AF401",
            name: "repository-ports-are-interfaces",
            description: "Repository types in Domain/Application must be interfaces",
            suffixes: REPOSITORY_SUFFIXES,
            severity: Severity::Error,
        }
    }

    /// AF402: `*Client` and `*Gateway` ports.
    #[must_use]
    pub fn clients_and_gateways() -> Self {
        Self {
            code: "AF402",
            name: "client-gateway-ports-are-interfaces",
            description: "Client and Gateway types in Domain/Application must be interfaces",
            suffixes: CLIENT_GATEWAY_SUFFIXES,
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

impl ArchRule for PortsAreInterfaces {
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
        let components = PORT_LAYERS
            .iter()
            .flat_map(|l| ctx.model.layer(*l))
            .map(String::as_str);

        let violations = ctx
            .types_in(components)
            .into_iter()
            .filter(|(_, ty)| has_suffix(&ty.name, self.suffixes) && !ty.is_interface())
            .map(|(component, ty)| {
                Violation::structural(
                    component,
                    format!(
                        "{component}: port '{}' must be an interface",
                        ty.full_name()
                    ),
                )
            });
        self.verdict(violations)
    }
}

/// Rule code for adapters-implement-ports.
pub const ADAPTERS_IMPLEMENT_PORTS_CODE: &str = "AF403";

/// Rule name for adapters-implement-ports.
pub const ADAPTERS_IMPLEMENT_PORTS_NAME: &str = "adapters-implement-ports";

/// Every concrete Infrastructure adapter `X` implements port `IX`.
#[derive(Debug, Clone)]
pub struct AdaptersImplementPorts {
    /// Severity level.
    pub severity: Severity,
}

impl Default for AdaptersImplementPorts {
    fn default() -> Self {
        Self::new()
    }
}

impl AdaptersImplementPorts {
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

impl ArchRule for AdaptersImplementPorts {
    fn name(&self) -> &'static str {
        ADAPTERS_IMPLEMENT_PORTS_NAME
    }

    fn code(&self) -> &'static str {
        ADAPTERS_IMPLEMENT_PORTS_CODE
    }

    fn description(&self) -> &'static str {
        "Infrastructure repositories, clients and gateways must implement their port interface"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Verdict {
        let port_components = PORT_LAYERS
            .iter()
            .flat_map(|l| ctx.model.layer(*l))
            .map(String::as_str);

        // first declaration wins, components are visited in sorted order
        let mut ports: HashMap<&str, &TypeDecl> = HashMap::new();
        for (_, ty) in ctx.types_in(port_components) {
            if ty.is_interface() {
                ports.entry(ty.name.as_str()).or_insert(ty);
            }
        }

        debug!("{} port interface(s) in Domain/Application", ports.len());

        let hierarchy = TypeHierarchy::new(ctx.catalog);
        let infrastructure = ctx
            .model
            .layer(Layer::Infrastructure)
            .iter()
            .map(String::as_str);

        let mut violations = Vec::new();
        for (component, adapter) in ctx.types_in(infrastructure) {
            if !adapter.is_concrete_class() || !has_suffix(&adapter.name, ADAPTER_SUFFIXES) {
                continue;
            }

            let expected = format!("I{}", adapter.name);
            match ports.get(expected.as_str()) {
                None => violations.push(Violation::structural(
                    component,
                    format!(
                        "{component}: adapter '{}' must implement '{expected}' declared in a Domain/Application component, but it was not found",
                        adapter.full_name()
                    ),
                )),
                Some(port) if !hierarchy.is_a(adapter, &expected) => {
                    violations.push(Violation::structural(
                        component,
                        format!(
                            "{component}: adapter '{}' does not implement expected port interface '{}'",
                            adapter.full_name(),
                            port.full_name()
                        ),
                    ));
                }
                Some(_) => {}
            }
        }

        self.verdict(violations)
    }
}
