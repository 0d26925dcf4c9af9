//! Check command implementation.

use anyhow::{Context, Result};
use arch_fit_core::{Config, Evaluator, RuleBox};
use arch_fit_rules::{find_rule, Preset};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options of `arch-fit check`.
#[derive(Debug)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Preset used when no rules are listed.
    pub preset: Preset,
    /// Overrides `scope.root_prefix`.
    pub root_prefix: Option<String>,
    /// Overrides `scope.search_paths` when non-empty.
    pub search_paths: Vec<PathBuf>,
}

/// Runs the check command.
pub fn run(path: &Path, source: &ConfigSource, options: &CheckOptions) -> Result<()> {
    let config = apply_overrides(load_config(source)?, options);

    let rules = match &options.rules {
        Some(filter) => select_rules(filter),
        None => options.preset.rules(),
    };

    let evaluator = Evaluator::builder()
        .config(config)
        .rules(rules)
        .build()
        .context("Failed to set up the check")?;

    tracing::info!(
        "Checking {} with {} rule(s)",
        path.display(),
        evaluator.rule_count()
    );

    let report = evaluator.run(path).context("Check failed")?;
    let fail_on = evaluator.config().fail_on();

    super::output::print(&report, options.format, fail_on)?;

    if report.has_failures_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(p) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", p.display());
    }
    Config::from_file(p).with_context(|| format!("Failed to load config: {}", p.display()))
}

fn apply_overrides(mut config: Config, options: &CheckOptions) -> Config {
    if let Some(prefix) = &options.root_prefix {
        config = config.with_root_prefix(prefix.clone());
    }
    if !options.search_paths.is_empty() {
        config = config.with_search_paths(options.search_paths.iter().cloned());
    }
    config
}

fn select_rules(filter: &str) -> Vec<RuleBox> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let rule = find_rule(name);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}
