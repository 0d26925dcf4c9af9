//! # arch-fit-core
//!
//! Core framework for architecture fitness checks over a modular, layered
//! system described by its components.
//!
//! This crate provides:
//!
//! - [`ComponentCatalog`] trait, [`CatalogSnapshot`] and [`ManifestLoader`]
//!   for discovering components and the types they declare
//! - [`classify`] for deriving a component's [`Role`] from its name
//! - [`ArchitectureModel`] and [`DependencyGraph`] built once per run
//! - [`ArchRule`] trait and [`Evaluator`] for running rules
//! - [`Verdict`] and [`CheckReport`] for representing results
//!
//! ## Example
//!
//! ```ignore
//! use arch_fit_core::{Config, Evaluator};
//!
//! let evaluator = Evaluator::builder()
//!     .config(Config::new().with_root_prefix("MyApp").with_search_paths(["./artifacts"]))
//!     .rule(MyRule)
//!     .build()?;
//!
//! let report = evaluator.run(Path::new("."))?;
//! println!("{}", report.format_test_report(Severity::Error));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod classify;
mod component;
mod config;
mod context;
mod error;
mod evaluator;
mod graph;
mod model;
mod rule;
mod types;

pub use catalog::{CatalogSnapshot, ComponentCatalog, LoadError, ManifestLoader, Scope};
pub use classify::{
    building_block_id, building_blocks_token, classify, is_tooling, layer_from_suffix,
    module_component_id, module_name, modules_token, Layer, Role, API_ALIASES,
    BUILDING_BLOCKS_SEGMENT, DEFAULT_TOOLING_SUFFIXES, LAYER_SUFFIXES, MODULES_SEGMENT,
};
pub use component::{simple_name, Component, TypeDecl, TypeKind};
pub use config::{
    Config, ConfigError, ForbiddenLibraries, PersistenceConfig, RuleConfig, ScopeConfig,
};
pub use context::RuleContext;
pub use error::DiscoveryError;
pub use evaluator::{Evaluator, EvaluatorBuilder, EvaluatorError};
pub use graph::DependencyGraph;
pub use model::{ArchitectureModel, BuildingBlocks, ModuleGroup};
pub use rule::{ArchRule, RuleBox};
pub use types::{CheckReport, Severity, Verdict, Violation};
