//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "arch-fit.toml";

const DEFAULT_CONFIG: &str = r#"# arch-fit configuration

# Severity that fails a run: "info", "warning" or "error" (default)
# fail_on = "warning"

[scope]
# Identifier prefix of the checked system, e.g. components named
# MyApp.Modules.Billing.Domain or MyApp.BuildingBlocks.Infrastructure
root_prefix = "MyApp"

# Directories holding component manifests, relative to the project
search_paths = ["./artifacts"]

# Components whose names end with these suffixes are tooling, not product
exclude_suffixes = [".Tests", ".ArchTests"]

# Manifest file names
patterns = ["*.component.json", "*.component.toml"]

[persistence]
# Base type that marks a persistence context
context_base = "DbContext"

[forbidden-libraries]
domain = [
    "Microsoft.EntityFrameworkCore",
    "Microsoft.AspNetCore",
    "HotChocolate",
    "MediatR",
]
application = [
    "Microsoft.EntityFrameworkCore",
    "Microsoft.AspNetCore",
    "HotChocolate",
]
infrastructure = []
api = ["Microsoft.EntityFrameworkCore"]

# Rule configurations, keyed by rule name (see `arch-fit list-rules`)

[rules.module-isolation]
enabled = true
# severity = "warning"  # Override default severity

# [rules.adapters-implement-ports]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Set scope.root_prefix and scope.search_paths in {CONFIG_FILE}");
    println!("  2. Emit one component manifest per project into the search paths");
    println!("  3. Run: arch-fit check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
