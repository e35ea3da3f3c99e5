//! Inspect command - print every annotation on every declaration of a type

use std::path::Path;

use declmark::output::OutputMode;
use declmark::{report, storage};

/// Print all annotations attached to a type, its constructors, methods, and
/// fields
pub fn inspect(type_name: Option<&str>, file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = storage::resolve(file)?;

    let subject = match type_name {
        Some(name) => name.to_string(),
        None => registry
            .types()
            .next()
            .map(|d| d.name.clone())
            .ok_or_else(|| anyhow::anyhow!("Registry contains no type declarations"))?,
    };

    let report = report::full_report(&registry, &subject)?;
    report.render(mode);
    Ok(())
}
