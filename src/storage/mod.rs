//! Registry file storage
//!
//! Registries can be loaded from and written to `declmark.toml` files. The
//! file is a flat list of `[[declaration]]` tables, each with optional
//! `pending` flag and `[[declaration.marker]]` entries:
//!
//! ```toml
//! [[declaration]]
//! kind = "type"
//! name = "NuclearPlant"
//! pending = true
//!
//! [[declaration.marker]]
//! priority = "high"              # optional, defaults to high
//! description = "..."            # required, non-empty
//! assignees = ["Tom", "Dick"]    # optional
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::{Annotation, DeclKind, Declaration, Marker, Priority};
use crate::registry::Registry;

/// Default registry file name
pub const REGISTRY_FILE: &str = "declmark.toml";

/// A declmark.toml file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Declarations in this file
    #[serde(default, rename = "declaration")]
    pub declarations: Vec<DeclarationEntry>,
}

/// A declaration entry in declmark.toml
#[derive(Debug, Serialize, Deserialize)]
pub struct DeclarationEntry {
    /// Declaration kind: type, constructor, method, field
    pub kind: String,

    /// Declaration name
    pub name: String,

    /// Owning type name (members only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Whether the pending flag is attached
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pending: bool,

    /// Structured markers attached to this declaration
    #[serde(default, rename = "marker", skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<MarkerEntry>,
}

/// A marker entry in declmark.toml (serialization format)
#[derive(Debug, Serialize, Deserialize)]
pub struct MarkerEntry {
    /// Priority: low, medium, high
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Marker description
    pub description: String,

    /// Assignee names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
}

fn default_priority() -> String {
    Priority::default().to_string()
}

impl RegistryFile {
    /// Convert parsed entries into a validated registry
    ///
    /// The pending flag attaches before the structured markers, which keeps
    /// annotation order stable across a save/load round trip.
    pub fn to_registry(&self) -> anyhow::Result<Registry> {
        let mut builder = Registry::builder();

        for entry in &self.declarations {
            let kind: DeclKind = entry.kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let decl = match &entry.owner {
                Some(owner) => Declaration::member(kind, owner, &entry.name),
                None => Declaration {
                    kind,
                    name: entry.name.clone(),
                    owner: None,
                },
            };
            builder = builder.declare(decl);

            if entry.pending {
                builder = builder.attach(Annotation::Pending);
            }
            for marker in &entry.markers {
                let priority: Priority =
                    marker.priority.parse().map_err(|e: String| anyhow::anyhow!(e))?;
                builder = builder.attach(Annotation::Marker(Marker::with_options(
                    priority,
                    &marker.description,
                    marker.assignees.clone(),
                )));
            }
        }

        Ok(builder.build()?)
    }

    /// Build file entries from a registry
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let declarations = registry
            .declarations()
            .map(|decl| {
                let annotations = registry.annotations_of(decl);
                DeclarationEntry {
                    kind: decl.kind.to_string(),
                    name: decl.name.clone(),
                    owner: decl.owner.clone(),
                    pending: annotations.iter().any(Annotation::is_pending),
                    markers: annotations
                        .iter()
                        .filter_map(|a| a.as_marker())
                        .map(|m| MarkerEntry {
                            priority: m.priority.to_string(),
                            description: m.description.clone(),
                            assignees: m.assignees.clone(),
                        })
                        .collect(),
                }
            })
            .collect();

        Self { declarations }
    }
}

/// Load a registry from a declmark.toml file
pub fn load(path: &Path) -> anyhow::Result<Registry> {
    log::debug!("loading registry from {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read registry file: {}", path.display()))?;
    let file: RegistryFile = toml::from_str(&content)
        .with_context(|| format!("Invalid registry file: {}", path.display()))?;
    file.to_registry()
        .with_context(|| format!("Invalid registry in {}", path.display()))
}

/// Write a registry to a declmark.toml file
pub fn save(path: &Path, registry: &Registry) -> anyhow::Result<()> {
    let file = RegistryFile::from_registry(registry);
    let body = toml::to_string_pretty(&file)?;
    let content = format!("# declmark registry\n\n{body}");
    fs::write(path, content)
        .with_context(|| format!("Cannot write registry file: {}", path.display()))?;
    Ok(())
}

/// Resolve the registry to report over: an explicit file, the default
/// `declmark.toml` if present, or the built-in sample
pub fn resolve(file: Option<&Path>) -> anyhow::Result<Registry> {
    if let Some(path) = file {
        return load(path);
    }

    let default = Path::new(REGISTRY_FILE);
    if default.exists() {
        return load(default);
    }

    log::debug!("no registry file found, using built-in sample");
    Ok(crate::sample::nuclear_plant())
}
