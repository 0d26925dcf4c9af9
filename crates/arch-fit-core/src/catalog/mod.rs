//! Component catalog: the checker's view of the system under test.
//!
//! A catalog is an immutable snapshot built once per run from an explicit
//! [`Scope`]. Backends only need to produce [`Component`] values; the
//! [`ComponentCatalog`] trait is the seam the model builder and rules read
//! through.

mod manifest;

pub use manifest::{LoadError, ManifestLoader};

use crate::classify::DEFAULT_TOOLING_SUFFIXES;
use crate::component::{Component, TypeDecl};
use crate::error::DiscoveryError;

use std::collections::HashMap;
use std::path::PathBuf;

/// Read access to a set of components.
pub trait ComponentCatalog: Send + Sync {
    /// All components, sorted by identifier.
    fn list_components(&self) -> &[Component];

    /// Looks up a component by identifier.
    fn component(&self, id: &str) -> Option<&Component>;

    /// Types declared by a component (empty when unknown).
    fn list_types(&self, id: &str) -> &[TypeDecl] {
        match self.component(id) {
            Some(c) => &c.types,
            None => &[],
        }
    }

    /// Identifiers a component statically references (empty when unknown).
    fn list_dependencies(&self, id: &str) -> &[String] {
        match self.component(id) {
            Some(c) => &c.dependencies,
            None => &[],
        }
    }

    /// Soft failures collected while the catalog was materialised.
    fn discovery_errors(&self) -> &[DiscoveryError] {
        &[]
    }
}

/// Where to look for components and how to filter them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Identifier prefix of the system under test (e.g., `Root`).
    pub root_prefix: String,
    /// Directories holding component artifacts.
    pub search_paths: Vec<PathBuf>,
    /// Identifier suffixes of test/tooling components.
    pub tooling_suffixes: Vec<String>,
    /// File-name glob patterns of component artifacts.
    pub patterns: Vec<String>,
}

impl Scope {
    /// Default artifact file-name patterns.
    pub const DEFAULT_PATTERNS: &'static [&'static str] =
        &["*.component.json", "*.component.toml"];

    /// Creates a scope with default tooling suffixes and patterns.
    #[must_use]
    pub fn new(root_prefix: impl Into<String>) -> Self {
        Self {
            root_prefix: root_prefix.into(),
            search_paths: Vec::new(),
            tooling_suffixes: DEFAULT_TOOLING_SUFFIXES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            patterns: Self::DEFAULT_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }

    /// Adds a search location.
    #[must_use]
    pub fn search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Replaces the tooling suffixes.
    #[must_use]
    pub fn tooling_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tooling_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the artifact file-name patterns.
    #[must_use]
    pub fn patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }
}

/// Immutable in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    components: Vec<Component>,
    index: HashMap<String, usize>,
    errors: Vec<DiscoveryError>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, sorting by identifier and dropping duplicates.
    #[must_use]
    pub fn new(components: Vec<Component>) -> Self {
        Self::with_errors(components, Vec::new())
    }

    /// Builds a snapshot that also carries errors from an earlier loading stage.
    #[must_use]
    pub fn with_errors(mut components: Vec<Component>, mut errors: Vec<DiscoveryError>) -> Self {
        // stable: the first occurrence of a duplicate stays first
        components.sort_by(|a, b| a.id.cmp(&b.id));

        let mut kept: Vec<Component> = Vec::with_capacity(components.len());
        for component in components {
            if kept.last().is_some_and(|last| last.id == component.id) {
                tracing::warn!("Duplicate component {}, ignoring later artifact", component.id);
                errors.push(DiscoveryError::DuplicateComponent { id: component.id });
                continue;
            }
            kept.push(component);
        }

        let index = kept
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Self {
            components: kept,
            index,
            errors,
        }
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the catalog holds no component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentCatalog for CatalogSnapshot {
    fn list_components(&self) -> &[Component] {
        &self.components
    }

    fn component(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    fn discovery_errors(&self) -> &[DiscoveryError] {
        &self.errors
    }
}
