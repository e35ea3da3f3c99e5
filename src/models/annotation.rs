//! Annotation model
//!
//! An annotation is any metadata kind attachable to a declaration: either the
//! structured marker or the presence-only pending flag. The generic report
//! renders annotations through their default textual representation.

use serde::{Deserialize, Serialize};

use super::Marker;

/// Metadata attached to a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    /// A structured marker (priority, description, assignees)
    Marker(Marker),
    /// A presence-only flag marking the declaration as provisional
    Pending,
}

impl Annotation {
    /// Get the structured marker, if this annotation is one
    #[must_use]
    pub const fn as_marker(&self) -> Option<&Marker> {
        match self {
            Self::Marker(marker) => Some(marker),
            Self::Pending => None,
        }
    }

    /// Whether this annotation is the pending flag
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Marker(marker) => write!(
                f,
                "marker(priority: {}, description: \"{}\", assignees: {})",
                marker.priority,
                marker.description,
                marker.assignees_display()
            ),
        }
    }
}
