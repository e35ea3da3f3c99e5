//! Tests for the marker model

use declmark::models::{Marker, Priority};

// =============================================================================
// PRIORITY TESTS
// =============================================================================

#[test]
fn test_priority_from_str_low() {
    assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
    assert_eq!("LOW".parse::<Priority>().unwrap(), Priority::Low);
}

#[test]
fn test_priority_from_str_medium() {
    assert_eq!("medium".parse::<Priority>().unwrap(), Priority::Medium);
    assert_eq!("med".parse::<Priority>().unwrap(), Priority::Medium);
}

#[test]
fn test_priority_from_str_high() {
    assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
    assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
}

#[test]
fn test_priority_from_str_invalid() {
    let result = "urgent".parse::<Priority>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid priority"));
}

#[test]
fn test_priority_display() {
    assert_eq!(Priority::Low.to_string(), "low");
    assert_eq!(Priority::Medium.to_string(), "medium");
    assert_eq!(Priority::High.to_string(), "high");
}

#[test]
fn test_priority_default_is_high() {
    assert_eq!(Priority::default(), Priority::High);
}

// =============================================================================
// MARKER TESTS
// =============================================================================

#[test]
fn test_marker_new_defaults_to_high_priority() {
    let marker = Marker::new("Procedure for nuclear reactor shutdown");

    assert_eq!(marker.priority, Priority::High);
    assert_eq!(marker.description, "Procedure for nuclear reactor shutdown");
    assert!(marker.assignees.is_empty());
}

#[test]
fn test_marker_with_options() {
    let marker = Marker::with_options(
        Priority::Low,
        "Exchange nuclear rods",
        vec!["Tom".to_string(), "Dick".to_string()],
    );

    assert_eq!(marker.priority, Priority::Low);
    assert_eq!(marker.description, "Exchange nuclear rods");
    assert_eq!(marker.assignees, vec!["Tom", "Dick"]);
}

#[test]
fn test_marker_assigned_to_appends_in_order() {
    let marker = Marker::new("Check pumps").assigned_to(&["Tom"]).assigned_to(&["Harriet"]);

    assert_eq!(marker.assignees, vec!["Tom", "Harriet"]);
}

#[test]
fn test_marker_assignees_display_brackets() {
    let marker = Marker::new("Check pumps").assigned_to(&["Tom", "Dick", "Harriet"]);

    assert_eq!(marker.assignees_display(), "[Tom, Dick, Harriet]");
}

#[test]
fn test_marker_assignees_display_empty() {
    let marker = Marker::new("Check pumps");

    assert_eq!(marker.assignees_display(), "[]");
}

#[test]
fn test_marker_assignees_allow_duplicates() {
    let marker = Marker::new("Check pumps").assigned_to(&["Tom", "Tom"]);

    assert_eq!(marker.assignees, vec!["Tom", "Tom"]);
}
