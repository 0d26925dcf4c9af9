//! # arch-fit-rules
//!
//! Built-in architecture rules for arch-fit.
//!
//! The rules target a modular monolith laid out as
//! `{root}.Modules.{Module}.{Layer}` plus cross-cutting
//! `{root}.BuildingBlocks.{Layer}` components.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | AF101 | `api-not-depend-on-domain` | Api ↛ Domain |
//! | AF102 | `api-not-depend-on-infrastructure` | Api ↛ Infrastructure |
//! | AF103 | `domain-not-depend-on-application` | Domain ↛ Application |
//! | AF104 | `domain-not-depend-on-infrastructure` | Domain ↛ Infrastructure |
//! | AF105 | `domain-not-depend-on-api` | Domain ↛ Api |
//! | AF106 | `application-not-depend-on-api-or-infrastructure` | Application ↛ Api, Infrastructure |
//! | AF107 | `infrastructure-not-depend-on-api` | Infrastructure ↛ Api |
//! | AF108 | `domain-not-depend-on-outer-building-blocks` | Domain ↛ outer building blocks |
//! | AF109 | `application-not-depend-on-outer-building-blocks` | Application ↛ Infrastructure/Api building blocks |
//! | AF201 | `building-blocks-domain-isolated` | Domain building block depends on no other building block |
//! | AF202 | `building-blocks-application-depends-only-on-domain` | Application building block ↛ Infrastructure/Api building blocks |
//! | AF203 | `building-blocks-infrastructure-not-depend-on-api` | Infrastructure building block ↛ Api building block |
//! | AF204 | `building-blocks-api-not-depend-on-infrastructure` | Api building block ↛ Infrastructure building block |
//! | AF205 | `only-api-depends-on-building-blocks-api` | Only Api may use the Api building block |
//! | AF206 | `only-infrastructure-depends-on-building-blocks-infrastructure` | Only Infrastructure may use the Infrastructure building block |
//! | AF301 | `module-isolation` | Modules do not reference each other |
//! | AF302 | `building-blocks-not-depend-on-modules` | Building blocks do not reference modules |
//! | AF401 | `repository-ports-are-interfaces` | `*Repository` ports are interfaces |
//! | AF402 | `client-gateway-ports-are-interfaces` | `*Client`/`*Gateway` ports are interfaces |
//! | AF403 | `adapters-implement-ports` | Adapter `X` implements port `IX` |
//! | AF501 | `persistence-context-in-infrastructure` | Persistence contexts live in Infrastructure |
//! | AF502 | `module-persistence-context-placement` | A module's context lives in its Infrastructure |
//! | AF601 | `forbidden-libraries` | Layers avoid configured external libraries |
//!
//! ## Usage
//!
//! ```ignore
//! use arch_fit_core::{Config, Evaluator};
//! use arch_fit_rules::{all_rules, ModuleIsolation};
//!
//! let evaluator = Evaluator::builder()
//!     .config(Config::new().with_root_prefix("MyApp"))
//!     .rules(all_rules())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod building_blocks;
mod dependency;
mod hierarchy;
mod layering;
mod libraries;
mod modules;
mod persistence;
mod ports;
mod presets;

#[cfg(test)]
mod test_support;

pub use building_blocks::*;
pub use dependency::{DependencyRule, Selector};
pub use layering::*;
pub use libraries::{matches_library, NoForbiddenLibraries};
pub use modules::{BuildingBlocksNotDependOnModules, ModuleIsolation};
pub use persistence::{ModulePersistenceContextPlacement, PersistenceContextInInfrastructure};
pub use ports::{AdaptersImplementPorts, PortsAreInterfaces};
pub use presets::{all_rules, dependency_rules, find_rule, structure_rules, Preset};

/// Re-export core types for convenience.
pub use arch_fit_core::{ArchRule, Severity, Verdict, Violation};
