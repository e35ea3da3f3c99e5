//! Initialize a registry file with the built-in sample

use std::path::Path;

use declmark::output::OutputMode;
use declmark::{sample, storage};

/// Write the sample registry to declmark.toml
pub fn init(force: bool, _mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(storage::REGISTRY_FILE);

    if path.exists() && !force {
        println!("Already initialized ({} exists).", storage::REGISTRY_FILE);
        println!("Use --force to overwrite.");
        return Ok(());
    }

    let registry = sample::nuclear_plant();
    storage::save(path, &registry)?;

    println!("Created {}", storage::REGISTRY_FILE);
    println!(
        "  {} declaration(s), {} annotation(s)",
        registry.len(),
        registry.annotation_count()
    );
    println!("\nNext steps:");
    println!("  declmark tasks      # report structured task markers");
    println!("  declmark inspect    # print every annotation per declaration");

    Ok(())
}
