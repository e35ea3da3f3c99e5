//! Built-in sample registry
//!
//! The sample subject is a nuclear plant: a type with markers on itself, its
//! constructor, and two of its methods, plus a legacy method and field that
//! carry no metadata at all. It doubles as the registry written by
//! `declmark init`.

use crate::models::{Annotation, Declaration, Marker, Priority};
use crate::registry::Registry;

/// Name of the sample subject type
pub const SAMPLE_TYPE: &str = "NuclearPlant";

/// Build the sample nuclear plant registry
///
/// # Panics
///
/// Panics if the statically registered sample violates registry invariants,
/// which would be a bug in this module.
#[must_use]
pub fn nuclear_plant() -> Registry {
    Registry::builder()
        .declare(Declaration::ty(SAMPLE_TYPE))
        .attach(Annotation::Pending)
        .attach(Annotation::Marker(
            Marker::with_options(
                Priority::High,
                "Class for running a nuclear reactor.",
                Vec::new(),
            )
            .assigned_to(&["Tom", "Dick", "Harriet"]),
        ))
        .declare(Declaration::constructor(SAMPLE_TYPE, "new"))
        .attach(Annotation::Pending)
        .declare(Declaration::field(SAMPLE_TYPE, "out_of_production"))
        .declare(Declaration::method(SAMPLE_TYPE, "not_in_use"))
        .declare(Declaration::method(SAMPLE_TYPE, "shut_down_nuclear_reactor"))
        .attach(Annotation::Pending)
        .attach(Annotation::Marker(
            // Priority omitted in the original declaration; defaults to high
            Marker::new("Procedure for nuclear reactor shutdown").assigned_to(&["Tom", "Harriet"]),
        ))
        .declare(Declaration::method(SAMPLE_TYPE, "change_nuclear_rods"))
        .attach(Annotation::Marker(
            Marker::with_options(Priority::Low, "Exchange nuclear rods", Vec::new())
                .assigned_to(&["Tom", "Dick"]),
        ))
        .build()
        .expect("sample registry is valid")
}
