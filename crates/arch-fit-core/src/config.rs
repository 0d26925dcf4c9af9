//! Configuration types for arch-fit.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::Scope;
use crate::classify::{Layer, DEFAULT_TOOLING_SUFFIXES};
use crate::types::Severity;

/// Top-level configuration, usually read from `arch-fit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold that fails a run (default: `error`).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// What to check and where to find it.
    #[serde(default)]
    pub scope: ScopeConfig,

    /// Persistence-context detection.
    #[serde(default)]
    pub persistence: PersistenceConfig,

    /// Forbidden external libraries per layer.
    #[serde(default, rename = "forbidden-libraries")]
    pub forbidden_libraries: ForbiddenLibraries,

    /// Per-rule configurations, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Sets the root prefix.
    #[must_use]
    pub fn with_root_prefix(mut self, root_prefix: impl Into<String>) -> Self {
        self.scope.root_prefix = Some(root_prefix.into());
        self
    }

    /// Replaces the search paths.
    #[must_use]
    pub fn with_search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.scope.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Root prefix of the checked system.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRootPrefix`] when unset or blank.
    pub fn root_prefix(&self) -> Result<&str, ConfigError> {
        match self.scope.root_prefix.as_deref().map(str::trim) {
            Some(prefix) if !prefix.is_empty() => Ok(prefix),
            _ => Err(ConfigError::MissingRootPrefix),
        }
    }

    /// Builds the catalog scope. Relative search paths resolve against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the root prefix is missing.
    pub fn to_scope(&self, base: &Path) -> Result<Scope, ConfigError> {
        let mut scope = Scope::new(self.root_prefix()?)
            .tooling_suffixes(self.scope.exclude_suffixes.iter().cloned())
            .patterns(self.scope.patterns.iter().cloned());
        for path in &self.scope.search_paths {
            scope = scope.search_path(if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            });
        }
        Ok(scope)
    }

    /// Severity threshold that fails a run.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// `[scope]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Identifier prefix of the checked system (e.g., `MyApp`).
    #[serde(default)]
    pub root_prefix: Option<String>,

    /// Directories holding component manifests.
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,

    /// Identifier suffixes of test/tooling components.
    #[serde(default = "default_exclude_suffixes")]
    pub exclude_suffixes: Vec<String>,

    /// Manifest file-name patterns.
    #[serde(default = "default_patterns")]
    pub patterns: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            root_prefix: None,
            search_paths: default_search_paths(),
            exclude_suffixes: default_exclude_suffixes(),
            patterns: default_patterns(),
        }
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_exclude_suffixes() -> Vec<String> {
    to_strings(DEFAULT_TOOLING_SUFFIXES)
}

fn default_patterns() -> Vec<String> {
    to_strings(Scope::DEFAULT_PATTERNS)
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// `[persistence]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Simple name of the persistence-context base type.
    #[serde(default = "default_context_base")]
    pub context_base: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            context_base: default_context_base(),
        }
    }
}

fn default_context_base() -> String {
    "DbContext".to_string()
}

/// `[forbidden-libraries]` section: external identifier prefixes per layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenLibraries {
    /// Forbidden for Domain components.
    #[serde(default = "default_domain_forbidden")]
    pub domain: Vec<String>,
    /// Forbidden for Application components.
    #[serde(default = "default_application_forbidden")]
    pub application: Vec<String>,
    /// Forbidden for Infrastructure components.
    #[serde(default)]
    pub infrastructure: Vec<String>,
    /// Forbidden for Api components.
    #[serde(default = "default_api_forbidden")]
    pub api: Vec<String>,
}

impl Default for ForbiddenLibraries {
    fn default() -> Self {
        Self {
            domain: default_domain_forbidden(),
            application: default_application_forbidden(),
            infrastructure: Vec::new(),
            api: default_api_forbidden(),
        }
    }
}

impl ForbiddenLibraries {
    /// Forbidden prefixes for `layer`.
    #[must_use]
    pub fn for_layer(&self, layer: Layer) -> &[String] {
        match layer {
            Layer::Domain => &self.domain,
            Layer::Application => &self.application,
            Layer::Infrastructure => &self.infrastructure,
            Layer::Api => &self.api,
            Layer::Unknown => &[],
        }
    }
}

const EF_CORE: &str = "Microsoft.EntityFrameworkCore";
const ASPNET_CORE: &str = "Microsoft.AspNetCore";
const HOT_CHOCOLATE: &str = "HotChocolate";
const MEDIATR: &str = "MediatR";

fn default_domain_forbidden() -> Vec<String> {
    to_strings(&[EF_CORE, ASPNET_CORE, HOT_CHOCOLATE, MEDIATR])
}

fn default_application_forbidden() -> Vec<String> {
    to_strings(&[EF_CORE, ASPNET_CORE, HOT_CHOCOLATE])
}

fn default_api_forbidden() -> Vec<String> {
    to_strings(&[EF_CORE])
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// `scope.root_prefix` is not set.
    #[error("No root prefix configured (set `scope.root_prefix` or pass --root-prefix)")]
    MissingRootPrefix,
}
