//! Report building
//!
//! Two read-only views over a registry:
//! - the task report keeps only declarations carrying at least one structured
//!   marker and lists each marker's fields;
//! - the inspection report walks a type's own annotations, then its
//!   constructors, methods, and fields, listing every annotation of any kind
//!   and keeping a header even for declarations with none.

use crate::models::{DeclKind, Declaration};
use crate::output::{InspectEntry, InspectReport, MarkerInfo, TaskMatch, TaskReport};
use crate::registry::{Registry, RegistryError};

/// Build a task report over the given declarations, in the order supplied
///
/// Declarations without a structured marker (including pending-only ones) are
/// silently skipped; that is a filter miss, not an error. An empty input
/// produces an empty report.
pub fn task_report<'a, I>(registry: &Registry, decls: I) -> TaskReport
where
    I: IntoIterator<Item = &'a Declaration>,
{
    let matches: Vec<TaskMatch> = decls
        .into_iter()
        .filter_map(|decl| {
            let markers: Vec<MarkerInfo> = registry
                .annotations_of(decl)
                .iter()
                .filter_map(|a| a.as_marker())
                .map(|m| MarkerInfo {
                    description: m.description.clone(),
                    priority: m.priority.to_string(),
                    assignees: m.assignees.clone(),
                })
                .collect();

            if markers.is_empty() {
                None
            } else {
                Some(TaskMatch {
                    declaration: decl.to_string(),
                    markers,
                })
            }
        })
        .collect();

    TaskReport { matches }
}

/// Build a task report the way the stock CLI run does: each type in
/// registration order, followed by its methods sorted by name
#[must_use]
pub fn task_report_for_types(registry: &Registry) -> TaskReport {
    let mut decls: Vec<&Declaration> = Vec::new();
    for ty in registry.types() {
        decls.push(ty);
        decls.extend(registry.members_of(&ty.name, DeclKind::Method));
    }
    task_report(registry, decls)
}

/// Build an inspection report for the named type
///
/// Enumerates the type declaration itself, then its constructors, methods,
/// and fields (members name-sorted within each category). Every declaration
/// gets an entry; zero attached annotations is an explicit state, not an
/// error.
pub fn full_report(registry: &Registry, type_name: &str) -> Result<InspectReport, RegistryError> {
    let ty = registry
        .type_decl(type_name)
        .ok_or_else(|| RegistryError::UnknownType {
            name: type_name.to_string(),
        })?;

    let mut decls: Vec<&Declaration> = vec![ty];
    for kind in [DeclKind::Constructor, DeclKind::Method, DeclKind::Field] {
        decls.extend(registry.members_of(type_name, kind));
    }

    let entries: Vec<InspectEntry> = decls
        .into_iter()
        .map(|decl| InspectEntry {
            declaration: decl.to_string(),
            annotations: registry
                .annotations_of(decl)
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
        .collect();

    log::debug!("inspected '{type_name}': {} declaration(s)", entries.len());

    Ok(InspectReport {
        subject: type_name.to_string(),
        entries,
    })
}
