//! Rule presets for common configurations.

use crate::building_blocks::BUILDING_BLOCK_RULES;
use crate::layering::LAYERING_RULES;
use crate::{
    AdaptersImplementPorts, BuildingBlocksNotDependOnModules, NoForbiddenLibraries,
    ModuleIsolation, ModulePersistenceContextPlacement, PersistenceContextInInfrastructure,
    PortsAreInterfaces,
};
use arch_fit_core::RuleBox;

/// Preset configurations for arch-fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule.
    All,
    /// Component-level dependency rules only (layering, building blocks,
    /// modules, libraries).
    Dependencies,
    /// Type-level rules only (ports, persistence contexts).
    Structure,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::All => all_rules(),
            Self::Dependencies => dependency_rules(),
            Self::Structure => structure_rules(),
        }
    }

    /// Parses a preset name (`all`, `dependencies`, `structure`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "dependencies" => Some(Self::Dependencies),
            "structure" => Some(Self::Structure),
            _ => None,
        }
    }
}

/// Returns the dependency rules: AF1xx, AF2xx, AF3xx and AF601.
#[must_use]
pub fn dependency_rules() -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = LAYERING_RULES
        .iter()
        .chain(BUILDING_BLOCK_RULES)
        .cloned()
        .map(|r| Box::new(r) as RuleBox)
        .collect();
    rules.push(Box::new(ModuleIsolation::new()));
    rules.push(Box::new(BuildingBlocksNotDependOnModules::new()));
    rules.push(Box::new(NoForbiddenLibraries::new()));
    rules
}

/// Returns the type-level rules: AF4xx and AF5xx.
#[must_use]
pub fn structure_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PortsAreInterfaces::repositories()),
        Box::new(PortsAreInterfaces::clients_and_gateways()),
        Box::new(AdaptersImplementPorts::new()),
        Box::new(PersistenceContextInInfrastructure::new()),
        Box::new(ModulePersistenceContextPlacement::new()),
    ]
}

/// Returns all available rules, sorted by code.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    let mut rules = dependency_rules();
    rules.extend(structure_rules());
    rules.sort_by_key(|r| r.code());
    rules
}

/// Finds a rule by name or code.
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name_or_code || r.code() == name_or_code)
}
