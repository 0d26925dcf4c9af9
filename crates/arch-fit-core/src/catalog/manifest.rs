//! Component manifest backend.
//!
//! Reads one JSON or TOML manifest per component from the scope's search
//! locations. Each location is first scanned at the top level only; when
//! nothing matches there, it is scanned recursively (build runners often
//! place artifacts in subfolders).
//!
//! Unreadable or malformed manifests never abort loading: they become
//! [`DiscoveryError`]s and the component is simply absent.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{CatalogSnapshot, Scope};
use crate::classify::is_tooling;
use crate::component::{Component, TypeDecl};
use crate::error::DiscoveryError;

/// Errors that prevent the loader from being set up at all.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An artifact file-name pattern is not a valid glob.
    #[error("invalid artifact pattern `{pattern}`: {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying glob error.
        source: glob::PatternError,
    },
}

/// On-disk shape of a component manifest.
#[derive(Debug, Deserialize)]
struct ManifestDto {
    name: String,
    #[serde(default)]
    references: Vec<String>,
    #[serde(default)]
    types: Vec<TypeDecl>,
}

/// Loads a [`CatalogSnapshot`] from component manifests.
pub struct ManifestLoader {
    scope: Scope,
    patterns: Vec<glob::Pattern>,
}

impl ManifestLoader {
    /// Creates a loader for the given scope.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the scope's patterns is not a valid glob.
    pub fn new(scope: Scope) -> Result<Self, LoadError> {
        let patterns = scope
            .patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|source| LoadError::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { scope, patterns })
    }

    /// Returns the scope this loader reads.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Scans every search location and builds the catalog.
    #[must_use]
    pub fn load(&self) -> CatalogSnapshot {
        let mut errors = Vec::new();
        let mut components = Vec::new();

        for location in &self.scope.search_paths {
            let mut artifacts = self.scan(location, Some(1), &mut errors);
            if artifacts.is_empty() {
                debug!(
                    "No artifacts at top level of {}, scanning recursively",
                    location.display()
                );
                artifacts = self.scan(location, None, &mut errors);
            }

            for path in artifacts {
                match self.read_manifest(&path) {
                    Ok(Some(component)) => components.push(component),
                    Ok(None) => {}
                    Err(e) => {
                        warn!("{e}");
                        errors.push(e);
                    }
                }
            }
        }

        info!(
            "Loaded {} component(s) under `{}` ({} discovery error(s))",
            components.len(),
            self.scope.root_prefix,
            errors.len()
        );

        CatalogSnapshot::with_errors(components, errors)
    }

    /// Lists matching artifact files under `root`, sorted by path.
    fn scan(
        &self,
        root: &Path,
        max_depth: Option<usize>,
        errors: &mut Vec<DiscoveryError>,
    ) -> Vec<PathBuf> {
        let mut walker = WalkDir::new(root).follow_links(true);
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                    let err = DiscoveryError::Unreadable {
                        path,
                        message: e.to_string(),
                    };
                    warn!("{err}");
                    if !errors.contains(&err) {
                        errors.push(err);
                    }
                    continue;
                }
            };

            if entry.file_type().is_file() && self.is_artifact(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        files
    }

    fn is_artifact(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// Parses one manifest. `Ok(None)` means the component is out of scope.
    fn read_manifest(&self, path: &Path) -> Result<Option<Component>, DiscoveryError> {
        debug!("Reading manifest: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| DiscoveryError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let dto = parse_manifest(path, &content)?;

        if !dto.name.starts_with(&self.scope.root_prefix) {
            debug!("Skipping {} (outside `{}`)", dto.name, self.scope.root_prefix);
            return Ok(None);
        }

        let tooling = is_tooling(&dto.name, &self.scope.tooling_suffixes);
        Ok(Some(Component {
            id: dto.name,
            is_tooling: tooling,
            dependencies: dedup_in_order(dto.references),
            types: dto.types,
        }))
    }
}

fn parse_manifest(path: &Path, content: &str) -> Result<ManifestDto, DiscoveryError> {
    let invalid = |message: String| DiscoveryError::InvalidManifest {
        path: path.to_path_buf(),
        message,
    };

    let dto: ManifestDto = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(content).map_err(|e| invalid(e.to_string()))?,
        _ => serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?,
    };

    if dto.name.trim().is_empty() {
        return Err(invalid("component name is empty".to_string()));
    }
    Ok(dto)
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
