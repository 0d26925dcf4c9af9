//! # arch-fit
//!
//! Architecture fitness functions for layered modular monoliths.
//!
//! This is the main facade crate that re-exports core functionality and rules.
//!
//! ## Quick Start: `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! arch-fit = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/architecture.rs
//! #[test]
//! fn architecture() {
//!     arch_fit::check_project();
//! }
//! ```
//!
//! This runs every rule as part of `cargo test`, configured via the
//! nearest `arch-fit.toml`. A failing run panics with a report listing each
//! failing rule and its violations.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use arch_fit::{Config, Evaluator};
//! use arch_fit::rules::all_rules;
//!
//! let evaluator = Evaluator::builder()
//!     .config(Config::new().with_root_prefix("MyApp").with_search_paths(["artifacts"]))
//!     .rules(all_rules())
//!     .build()?;
//!
//! let report = evaluator.run(Path::new("."))?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use arch_fit_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use arch_fit_rules::*;
}

mod runner;

pub use runner::{check_project, evaluate_project, run_check, run_check_in};
