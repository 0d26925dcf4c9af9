//! `cargo test` integration.
//!
//! The `run_check*` functions panic with a formatted report when the run
//! fails, so an architecture test is a single call inside `#[test]`.

use anyhow::{Context, Result};
use arch_fit_core::{CheckReport, Config, Evaluator};
use arch_fit_rules::Preset;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["arch-fit.toml", ".arch-fit.toml"];

/// Loads the nearest `arch-fit.toml` and runs every rule.
///
/// The project root is the closest directory at or above
/// `CARGO_MANIFEST_DIR` (or the working directory) holding a config file.
/// Relative search paths resolve against it.
///
/// # Panics
///
/// Panics if no config file is found, if it is invalid, or if the run fails.
pub fn check_project() {
    let start = start_dir();
    let Some(config_path) = find_config(&start) else {
        panic!(
            "arch-fit: no {} found at or above {}",
            CONFIG_CANDIDATES.join(" or "),
            start.display()
        );
    };
    let config = Config::from_file(&config_path).unwrap_or_else(|e| panic!("arch-fit: {e}"));
    let root = config_path.parent().map_or_else(|| start.clone(), Path::to_path_buf);
    run_check_in(&root, config, Preset::All);
}

/// Runs every rule with `config`, resolving search paths against the
/// project root.
///
/// # Panics
///
/// Panics if the configuration is invalid or the run fails.
pub fn run_check(config: Config) {
    let start = start_dir();
    let root = find_config(&start)
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or(start);
    run_check_in(&root, config, Preset::All);
}

/// Runs `preset` with `config`, resolving search paths against `base`.
///
/// # Panics
///
/// Panics if the configuration is invalid, or with the formatted report if
/// any rule fails at or above the configured `fail_on` severity.
pub fn run_check_in(base: &Path, config: Config, preset: Preset) {
    let fail_on = config.fail_on();
    let report = evaluate_project(base, config, preset).unwrap_or_else(|e| {
        panic!("arch-fit: {e:#}");
    });

    if report.has_failures_at(fail_on) {
        panic!("{}", report.format_test_report(fail_on));
    }
}

/// Runs `preset` with `config` and returns the report without judging it.
///
/// # Errors
///
/// Returns an error if the root prefix is missing or a manifest pattern is
/// invalid. Unreadable manifests are not errors.
pub fn evaluate_project(base: &Path, config: Config, preset: Preset) -> Result<CheckReport> {
    let evaluator = Evaluator::builder()
        .config(config)
        .rules(preset.rules())
        .build()
        .context("failed to set up the check")?;

    evaluator
        .run(base)
        .with_context(|| format!("failed to check {}", base.display()))
}

fn start_dir() -> PathBuf {
    std::env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Nearest config file at or above `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
