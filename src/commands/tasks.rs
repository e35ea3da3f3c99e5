//! Tasks command - report structured task markers

use std::path::Path;

use declmark::output::OutputMode;
use declmark::{report, storage};

/// Report structured markers on every type and its methods
///
/// Declarations carrying no structured marker are filtered out; an empty
/// registry simply produces no output.
pub fn tasks(file: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = storage::resolve(file)?;
    let report = report::task_report_for_types(&registry);
    report.render(mode);
    Ok(())
}
