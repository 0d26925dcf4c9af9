//! Evaluator: builds the model once and runs every enabled rule against it.

use crate::catalog::{ComponentCatalog, LoadError, ManifestLoader};
use crate::config::{Config, ConfigError};
use crate::context::RuleContext;
use crate::graph::DependencyGraph;
use crate::model::ArchitectureModel;
use crate::rule::{ArchRule, RuleBox};
use crate::types::CheckReport;

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that prevent a check run from starting.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Manifest loader could not be set up.
    #[error("Catalog error: {0}")]
    Load(#[from] LoadError),
}

/// Builder for configuring an [`Evaluator`].
#[derive(Default)]
pub struct EvaluatorBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl EvaluatorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: ArchRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the evaluator.
    ///
    /// # Errors
    ///
    /// Returns an error if no root prefix is configured.
    pub fn build(self) -> Result<Evaluator, EvaluatorError> {
        let config = self.config.unwrap_or_default();
        config.root_prefix()?;
        Ok(Evaluator {
            rules: self.rules,
            config,
        })
    }
}

/// Runs the rule catalog against a component catalog.
///
/// Use [`Evaluator::builder()`] to construct an instance.
pub struct Evaluator {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Evaluator {
    /// Creates a new builder for configuring an evaluator.
    #[must_use]
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::new()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Loads component manifests from the configured scope and evaluates them.
    ///
    /// Relative search paths resolve against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scope is invalid. Unreadable artifacts are not
    /// errors; they end up in [`CheckReport::discovery_errors`].
    pub fn run(&self, base: &Path) -> Result<CheckReport, EvaluatorError> {
        let scope = self.config.to_scope(base)?;
        let catalog = ManifestLoader::new(scope)?.load();
        Ok(self.evaluate(&catalog))
    }

    /// Evaluates every enabled rule against `catalog`.
    #[must_use]
    pub fn evaluate(&self, catalog: &dyn ComponentCatalog) -> CheckReport {
        // root prefix was validated by the builder
        let root_prefix = self.config.root_prefix().unwrap_or_default();
        info!("Evaluating {} rule(s) for `{root_prefix}`", self.rules.len());

        let (model, model_errors) = ArchitectureModel::build(catalog, root_prefix);
        let graph = DependencyGraph::new(catalog);
        let ctx = RuleContext::new(&model, &graph, catalog, &self.config);

        let mut report = CheckReport::new();
        report.components_checked = model.all().len();
        report.discovery_errors = catalog.discovery_errors().to_vec();
        report.discovery_errors.extend(model_errors);

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let mut verdict = rule.evaluate(&ctx);
            if let Some(severity) = self.config.rule_severity(rule.name()) {
                verdict.severity = severity;
            }
            if let Some(reason) = &verdict.skipped {
                debug!("{} skipped: {reason}", rule.name());
            } else {
                debug!(
                    "{} {}: {} violation(s)",
                    rule.code(),
                    rule.name(),
                    verdict.violations.len()
                );
            }
            report.verdicts.push(verdict);
        }

        let (passed, failed, skipped) = report.counts();
        info!(
            "Check complete: {passed} passed ({skipped} skipped), {failed} failed across {} component(s)",
            report.components_checked
        );

        report
    }
}
