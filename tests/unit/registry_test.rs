//! Tests for the declaration-metadata registry

use declmark::models::{Annotation, DeclKind, Declaration, Marker, Priority};
use declmark::registry::{Registry, RegistryError};

fn plant_registry() -> Registry {
    Registry::builder()
        .declare(Declaration::ty("NuclearPlant"))
        .attach(Annotation::Pending)
        .declare(Declaration::method("NuclearPlant", "shut_down_nuclear_reactor"))
        .attach(Annotation::Marker(Marker::new("Procedure for nuclear reactor shutdown")))
        .declare(Declaration::method("NuclearPlant", "change_nuclear_rods"))
        .attach(Annotation::Marker(Marker::with_options(
            Priority::Low,
            "Exchange nuclear rods",
            vec![],
        )))
        .build()
        .unwrap()
}

// =============================================================================
// BUILDER TESTS
// =============================================================================

#[test]
fn test_builder_preserves_registration_order() {
    let registry = plant_registry();

    let names: Vec<String> = registry.declarations().map(|d| d.name.clone()).collect();
    assert_eq!(
        names,
        vec!["NuclearPlant", "shut_down_nuclear_reactor", "change_nuclear_rods"]
    );
}

#[test]
fn test_builder_rejects_duplicate_declaration() {
    let result = Registry::builder()
        .declare(Declaration::ty("NuclearPlant"))
        .declare(Declaration::ty("NuclearPlant"))
        .build();

    assert!(matches!(result, Err(RegistryError::DuplicateDeclaration { .. })));
}

#[test]
fn test_builder_rejects_dangling_annotation() {
    let result = Registry::builder().attach(Annotation::Pending).build();

    assert!(matches!(result, Err(RegistryError::DanglingAnnotation)));
}

#[test]
fn test_builder_rejects_empty_description() {
    let result = Registry::builder()
        .declare(Declaration::ty("NuclearPlant"))
        .attach(Annotation::Marker(Marker::new("   ")))
        .build();

    assert!(matches!(result, Err(RegistryError::EmptyDescription { .. })));
}

#[test]
fn test_builder_rejects_member_of_unknown_type() {
    let result = Registry::builder()
        .declare(Declaration::method("CoalPlant", "stoke"))
        .build();

    match result {
        Err(RegistryError::UnknownOwner { owner, .. }) => assert_eq!(owner, "CoalPlant"),
        other => panic!("expected UnknownOwner, got {other:?}"),
    }
}

#[test]
fn test_builder_rejects_member_without_owner() {
    let ownerless = Declaration {
        kind: DeclKind::Method,
        name: "stoke".to_string(),
        owner: None,
    };
    let result = Registry::builder().declare(ownerless).build();

    assert!(matches!(result, Err(RegistryError::MemberWithoutOwner { .. })));
}

#[test]
fn test_builder_accepts_member_declared_before_its_type() {
    let result = Registry::builder()
        .declare(Declaration::method("NuclearPlant", "not_in_use"))
        .declare(Declaration::ty("NuclearPlant"))
        .build();

    assert!(result.is_ok());
}

// =============================================================================
// QUERY TESTS
// =============================================================================

#[test]
fn test_annotations_of_preserves_attachment_order() {
    let decl = Declaration::ty("NuclearPlant");
    let registry = Registry::builder()
        .declare(decl.clone())
        .attach(Annotation::Pending)
        .attach(Annotation::Marker(Marker::new("Class for running a nuclear reactor.")))
        .build()
        .unwrap();

    let annotations = registry.annotations_of(&decl);
    assert_eq!(annotations.len(), 2);
    assert!(annotations[0].is_pending());
    assert!(annotations[1].as_marker().is_some());
}

#[test]
fn test_annotations_of_unknown_declaration_is_empty() {
    let registry = plant_registry();

    let unknown = Declaration::method("NuclearPlant", "refuel");
    assert!(registry.annotations_of(&unknown).is_empty());
}

#[test]
fn test_members_of_sorted_by_name() {
    let registry = plant_registry();

    let methods = registry.members_of("NuclearPlant", DeclKind::Method);
    let names: Vec<&str> = methods.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["change_nuclear_rods", "shut_down_nuclear_reactor"]);
}

#[test]
fn test_members_of_filters_by_kind() {
    let registry = plant_registry();

    assert!(registry.members_of("NuclearPlant", DeclKind::Field).is_empty());
    assert!(registry.members_of("NuclearPlant", DeclKind::Constructor).is_empty());
}

#[test]
fn test_type_decl_lookup() {
    let registry = plant_registry();

    assert!(registry.type_decl("NuclearPlant").is_some());
    assert!(registry.type_decl("CoalPlant").is_none());
}

#[test]
fn test_counts() {
    let registry = plant_registry();

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    assert_eq!(registry.annotation_count(), 3);
}
