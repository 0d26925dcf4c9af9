//! Naming classifier: maps a component identifier to its architectural role.
//!
//! Classification is table-driven and a pure function of
//! `(identifier, root_prefix)`:
//!
//! 1. identifiers outside `root_prefix` are [`Layer::Unknown`] and out of scope
//! 2. the layer comes from the identifier suffix ([`LAYER_SUFFIXES`])
//! 3. `{root}.BuildingBlocks.` marks a building block
//! 4. otherwise `{root}.Modules.{Module}.…` assigns a module
//!
//! Building-block detection runs before module detection, so an identifier
//! matching both is a building block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Architectural layer of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Entities, value objects, domain services.
    Domain,
    /// Use cases and ports.
    Application,
    /// Adapters: persistence, external clients.
    Infrastructure,
    /// Delivery: REST/GraphQL endpoints.
    Api,
    /// No convention matched.
    Unknown,
}

impl Layer {
    /// The four known layers, in dependency order.
    pub const KNOWN: [Layer; 4] = [
        Layer::Domain,
        Layer::Application,
        Layer::Infrastructure,
        Layer::Api,
    ];

    /// Identifier segment used for this layer (`Domain`, `Api`, ...).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Application => "Application",
            Self::Infrastructure => "Infrastructure",
            Self::Api => "Api",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Identifier suffix -> layer. Case-sensitive, ordinal.
pub const LAYER_SUFFIXES: &[(&str, Layer)] = &[
    (".Domain", Layer::Domain),
    (".Application", Layer::Application),
    (".Infrastructure", Layer::Infrastructure),
    (".Api", Layer::Api),
    (".RestApi", Layer::Api),
    (".Graphql", Layer::Api),
    (".GraphQL", Layer::Api),
];

/// Api slot aliases in resolution priority order.
pub const API_ALIASES: &[&str] = &["Api", "RestApi", "Graphql", "GraphQL"];

/// Namespace segment that marks building blocks.
pub const BUILDING_BLOCKS_SEGMENT: &str = "BuildingBlocks";

/// Namespace segment under which modules live.
pub const MODULES_SEGMENT: &str = "Modules";

/// Default identifier suffixes of test/tooling components.
pub const DEFAULT_TOOLING_SUFFIXES: &[&str] = &[".Tests", ".ArchTests"];

/// Derived role of a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    /// Layer from the identifier suffix.
    pub layer: Layer,
    /// Owning module, never set for building blocks.
    pub module: Option<String>,
    /// Whether this is a cross-cutting building block.
    pub is_building_block: bool,
    /// Whether the identifier lies under the root prefix.
    pub in_scope: bool,
}

impl Role {
    fn out_of_scope() -> Self {
        Self {
            layer: Layer::Unknown,
            module: None,
            is_building_block: false,
            in_scope: false,
        }
    }
}

/// Classifies a component identifier.
///
/// Never fails: anything unrecognised degrades to [`Layer::Unknown`].
#[must_use]
pub fn classify(identifier: &str, root_prefix: &str) -> Role {
    if !identifier.starts_with(root_prefix) {
        return Role::out_of_scope();
    }

    let layer = layer_from_suffix(identifier);

    if identifier.contains(&building_blocks_token(root_prefix)) {
        return Role {
            layer,
            module: None,
            is_building_block: true,
            in_scope: true,
        };
    }

    Role {
        layer,
        module: module_name(identifier, root_prefix).map(str::to_string),
        is_building_block: false,
        in_scope: true,
    }
}

/// Layer for an identifier, longest matching suffix wins.
#[must_use]
pub fn layer_from_suffix(identifier: &str) -> Layer {
    LAYER_SUFFIXES
        .iter()
        .filter(|(suffix, _)| identifier.ends_with(suffix))
        .max_by_key(|(suffix, _)| suffix.len())
        .map_or(Layer::Unknown, |(_, layer)| *layer)
}

/// Module segment following `{root}.Modules.`.
///
/// At least one further segment must follow the module name, so
/// `Root.Modules.Billing` carries no module while
/// `Root.Modules.Billing.Domain` belongs to `Billing`.
#[must_use]
pub fn module_name<'a>(identifier: &'a str, root_prefix: &str) -> Option<&'a str> {
    let token = modules_token(root_prefix);
    let idx = identifier.find(&token)?;
    let rest = &identifier[idx + token.len()..];
    let mut parts = rest.split('.').filter(|p| !p.is_empty());
    let module = parts.next()?;
    parts.next().map(|_| module)
}

/// Whether an identifier names a test/tooling component.
#[must_use]
pub fn is_tooling<S: AsRef<str>>(identifier: &str, suffixes: &[S]) -> bool {
    suffixes
        .iter()
        .any(|s| identifier.ends_with(s.as_ref()))
}

/// `{root}.BuildingBlocks.`
#[must_use]
pub fn building_blocks_token(root_prefix: &str) -> String {
    format!("{root_prefix}.{BUILDING_BLOCKS_SEGMENT}.")
}

/// `{root}.Modules.`
#[must_use]
pub fn modules_token(root_prefix: &str) -> String {
    format!("{root_prefix}.{MODULES_SEGMENT}.")
}

/// Exact identifier of the building block for `layer`.
#[must_use]
pub fn building_block_id(root_prefix: &str, layer: Layer) -> String {
    format!("{}{}", building_blocks_token(root_prefix), layer.segment())
}

/// Exact identifier of a module component with the given layer segment.
#[must_use]
pub fn module_component_id(root_prefix: &str, module: &str, segment: &str) -> String {
    format!("{}{module}.{segment}", modules_token(root_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "Root";

    #[test]
    fn out_of_scope_is_unknown() {
        let role = classify("Other.Modules.Billing.Domain", ROOT);
        assert_eq!(role.layer, Layer::Unknown);
        assert!(!role.in_scope);
        assert!(role.module.is_none());
    }

    #[test]
    fn layer_suffixes() {
        assert_eq!(classify("Root.Modules.A.Domain", ROOT).layer, Layer::Domain);
        assert_eq!(classify("Root.Modules.A.Application", ROOT).layer, Layer::Application);
        assert_eq!(
            classify("Root.Modules.A.Infrastructure", ROOT).layer,
            Layer::Infrastructure
        );
        for alias in API_ALIASES {
            let id = format!("Root.Modules.A.{alias}");
            assert_eq!(classify(&id, ROOT).layer, Layer::Api, "{id}");
        }
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert_eq!(classify("Root.Modules.A.domain", ROOT).layer, Layer::Unknown);
        assert_eq!(classify("Root.Modules.A.API", ROOT).layer, Layer::Unknown);
    }

    #[test]
    fn module_name_extracted() {
        let role = classify("Root.Modules.Billing.Infrastructure", ROOT);
        assert_eq!(role.module.as_deref(), Some("Billing"));
        assert!(!role.is_building_block);
    }

    #[test]
    fn module_needs_trailing_segment() {
        assert!(classify("Root.Modules.Billing", ROOT).module.is_none());
        assert!(classify("Root.Modules.", ROOT).module.is_none());
    }

    #[test]
    fn building_block_keeps_layer_and_has_no_module() {
        let role = classify("Root.BuildingBlocks.Application", ROOT);
        assert!(role.is_building_block);
        assert_eq!(role.layer, Layer::Application);
        assert!(role.module.is_none());
    }

    #[test]
    fn building_block_wins_over_module() {
        let role = classify("Root.BuildingBlocks.Root.Modules.X.Domain", ROOT);
        assert!(role.is_building_block);
        assert!(role.module.is_none());
    }

    #[test]
    fn other_root_components_have_no_group() {
        let role = classify("Root.Host", ROOT);
        assert!(role.in_scope);
        assert_eq!(role.layer, Layer::Unknown);
        assert!(role.module.is_none());
        assert!(!role.is_building_block);

        // API outside the Modules namespace: layered, but module-less
        let role = classify("Root.Customers.RestApi", ROOT);
        assert_eq!(role.layer, Layer::Api);
        assert!(role.module.is_none());
    }

    #[test]
    fn classification_is_deterministic() {
        for id in [
            "Root.Modules.Billing.Api",
            "Root.BuildingBlocks.Domain",
            "Root.Host",
            "Elsewhere",
        ] {
            assert_eq!(classify(id, ROOT), classify(id, ROOT));
        }
    }

    #[test]
    fn tooling_detection() {
        assert!(is_tooling("Root.ArchTests", DEFAULT_TOOLING_SUFFIXES));
        assert!(is_tooling("Root.Modules.A.Tests", DEFAULT_TOOLING_SUFFIXES));
        assert!(!is_tooling("Root.Modules.A.Domain", DEFAULT_TOOLING_SUFFIXES));
    }

    #[test]
    fn exact_identifiers() {
        assert_eq!(building_block_id(ROOT, Layer::Api), "Root.BuildingBlocks.Api");
        assert_eq!(
            module_component_id(ROOT, "Orders", "RestApi"),
            "Root.Modules.Orders.RestApi"
        );
    }
}
