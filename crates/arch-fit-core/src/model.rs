//! Architecture model: components grouped by layer, module and building block.
//!
//! The model is built once per run from a [`ComponentCatalog`] and is
//! immutable afterwards. Rules only read it.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

use crate::catalog::ComponentCatalog;
use crate::classify::{
    building_block_id, classify, module_component_id, Layer, Role, API_ALIASES,
};
use crate::error::DiscoveryError;

/// A module's components, one optional slot per layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleGroup {
    /// Module name (e.g., `Billing`).
    pub name: String,
    /// Api component (any alias).
    pub api: Option<String>,
    /// Application component.
    pub application: Option<String>,
    /// Domain component.
    pub domain: Option<String>,
    /// Infrastructure component.
    pub infrastructure: Option<String>,
}

impl ModuleGroup {
    /// Component occupying the slot for `layer`.
    #[must_use]
    pub fn slot(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Domain => self.domain.as_deref(),
            Layer::Application => self.application.as_deref(),
            Layer::Infrastructure => self.infrastructure.as_deref(),
            Layer::Api => self.api.as_deref(),
            Layer::Unknown => None,
        }
    }

    /// Present components in Domain, Application, Infrastructure, Api order.
    pub fn components(&self) -> impl Iterator<Item = &str> + '_ {
        Layer::KNOWN.into_iter().filter_map(|l| self.slot(l))
    }
}

/// The four optional building-block slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildingBlocks {
    /// `{root}.BuildingBlocks.Domain`
    pub domain: Option<String>,
    /// `{root}.BuildingBlocks.Application`
    pub application: Option<String>,
    /// `{root}.BuildingBlocks.Infrastructure`
    pub infrastructure: Option<String>,
    /// `{root}.BuildingBlocks.Api`
    pub api: Option<String>,
}

impl BuildingBlocks {
    /// Building block for `layer`, if present.
    #[must_use]
    pub fn slot(&self, layer: Layer) -> Option<&str> {
        match layer {
            Layer::Domain => self.domain.as_deref(),
            Layer::Application => self.application.as_deref(),
            Layer::Infrastructure => self.infrastructure.as_deref(),
            Layer::Api => self.api.as_deref(),
            Layer::Unknown => None,
        }
    }

    fn slot_mut(&mut self, layer: Layer) -> Option<&mut Option<String>> {
        match layer {
            Layer::Domain => Some(&mut self.domain),
            Layer::Application => Some(&mut self.application),
            Layer::Infrastructure => Some(&mut self.infrastructure),
            Layer::Api => Some(&mut self.api),
            Layer::Unknown => None,
        }
    }

    /// Present building blocks in layer order.
    pub fn all(&self) -> impl Iterator<Item = &str> + '_ {
        Layer::KNOWN.into_iter().filter_map(|l| self.slot(l))
    }

    /// True when no building block was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all().next().is_none()
    }
}

/// Immutable architecture model of one check run.
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureModel {
    root_prefix: String,
    all: Vec<String>,
    tooling: Vec<String>,
    layers: BTreeMap<Layer, Vec<String>>,
    #[serde(skip)]
    roles: HashMap<String, Role>,
    building_blocks: BuildingBlocks,
    modules: Vec<ModuleGroup>,
}

impl ArchitectureModel {
    /// Classifies every catalog component and groups the results.
    ///
    /// Components outside `root_prefix` are ignored; tooling components are
    /// recorded but never grouped. Ambiguous module slots are resolved
    /// deterministically and reported as [`DiscoveryError::AmbiguousSlot`].
    #[must_use]
    pub fn build(
        catalog: &dyn ComponentCatalog,
        root_prefix: &str,
    ) -> (Self, Vec<DiscoveryError>) {
        let mut errors = Vec::new();
        let mut all = Vec::new();
        let mut tooling = Vec::new();
        let mut roles = HashMap::new();
        let mut layers: BTreeMap<Layer, Vec<String>> = BTreeMap::new();

        for component in catalog.list_components() {
            let role = classify(&component.id, root_prefix);
            if !role.in_scope {
                debug!("Out of scope: {}", component.id);
                continue;
            }
            if component.is_tooling {
                debug!("Excluding tooling component: {}", component.id);
                tooling.push(component.id.clone());
                continue;
            }

            all.push(component.id.clone());
            layers
                .entry(role.layer)
                .or_default()
                .push(component.id.clone());
            roles.insert(component.id.clone(), role);
        }

        let mut building_blocks = BuildingBlocks::default();
        for layer in Layer::KNOWN {
            let id = building_block_id(root_prefix, layer);
            if roles.contains_key(&id) {
                if let Some(slot) = building_blocks.slot_mut(layer) {
                    *slot = Some(id);
                }
            }
        }

        let module_names: BTreeSet<&str> = roles
            .values()
            .filter(|r| !r.is_building_block)
            .filter_map(|r| r.module.as_deref())
            .collect();

        let find = |module: &str, segment: &str| {
            let id = module_component_id(root_prefix, module, segment);
            roles.contains_key(&id).then_some(id)
        };

        let mut modules = Vec::with_capacity(module_names.len());
        for name in module_names {
            let mut api_candidates = API_ALIASES.iter().filter_map(|alias| find(name, alias));
            let api = api_candidates.next();
            for ignored in api_candidates {
                let err = DiscoveryError::AmbiguousSlot {
                    module: name.to_string(),
                    layer: Layer::Api,
                    kept: api.clone().unwrap_or_default(),
                    ignored,
                };
                warn!("{err}");
                errors.push(err);
            }

            modules.push(ModuleGroup {
                name: name.to_string(),
                api,
                application: find(name, Layer::Application.segment()),
                domain: find(name, Layer::Domain.segment()),
                infrastructure: find(name, Layer::Infrastructure.segment()),
            });
        }

        debug!(
            "Model: {} component(s), {} module(s), {} building block(s)",
            all.len(),
            modules.len(),
            building_blocks.all().count()
        );

        let model = Self {
            root_prefix: root_prefix.to_string(),
            all,
            tooling,
            layers,
            roles,
            building_blocks,
            modules,
        };
        (model, errors)
    }

    /// Root prefix this model was built for.
    #[must_use]
    pub fn root_prefix(&self) -> &str {
        &self.root_prefix
    }

    /// Every in-scope production component, sorted.
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.all
    }

    /// Excluded test/tooling components.
    #[must_use]
    pub fn tooling(&self) -> &[String] {
        &self.tooling
    }

    /// Components classified into `layer`.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &[String] {
        match self.layers.get(&layer) {
            Some(ids) => ids,
            None => &[],
        }
    }

    /// Name set of a layer, for fast membership tests.
    #[must_use]
    pub fn layer_names(&self, layer: Layer) -> HashSet<&str> {
        self.layer(layer).iter().map(String::as_str).collect()
    }

    /// Role of an in-scope production component.
    #[must_use]
    pub fn role(&self, id: &str) -> Option<&Role> {
        self.roles.get(id)
    }

    /// Building-block slots.
    #[must_use]
    pub fn building_blocks(&self) -> &BuildingBlocks {
        &self.building_blocks
    }

    /// Discovered modules, sorted by name.
    #[must_use]
    pub fn modules(&self) -> &[ModuleGroup] {
        &self.modules
    }

    /// Module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ModuleGroup> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Components occupying any module slot, in module order.
    #[must_use]
    pub fn module_components(&self) -> Vec<&str> {
        self.modules.iter().flat_map(ModuleGroup::components).collect()
    }
}
