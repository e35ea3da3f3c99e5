//! Validate command - check a registry file against the model invariants

use std::path::Path;

use declmark::output::{OutputMode, ValidateResult};
use declmark::storage;

/// Validate a registry file
///
/// Reports the declaration and annotation counts on success; on failure,
/// reports the first violation and exits non-zero.
pub fn validate(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(|| Path::new(storage::REGISTRY_FILE));

    if !path.exists() {
        anyhow::bail!("Registry file not found: {}", path.display());
    }

    let result = match storage::load(path) {
        Ok(registry) => ValidateResult {
            valid: true,
            file: path.display().to_string(),
            declarations: registry.len(),
            annotations: registry.annotation_count(),
            error: None,
        },
        Err(err) => ValidateResult {
            valid: false,
            file: path.display().to_string(),
            declarations: 0,
            annotations: 0,
            error: Some(format!("{err:#}")),
        },
    };

    let valid = result.valid;
    result.render(mode);

    if valid {
        Ok(())
    } else {
        anyhow::bail!("Registry file is invalid: {}", path.display())
    }
}
