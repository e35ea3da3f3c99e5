//! Marker model
//!
//! A marker is the structured metadata record attachable to a declaration:
//! a priority, a free-text description, and the people assigned to it.
//! Markers are immutable once attached and live as long as the registry.

use serde::{Deserialize, Serialize};

/// A structured metadata marker attached to a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Priority level (defaults to high)
    pub priority: Priority,

    /// What this marker is about (mandatory, non-empty)
    pub description: String,

    /// Names assigned to this marker, in declaration order (may be empty)
    #[serde(default)]
    pub assignees: Vec<String>,
}

/// Marker priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority
    Low,
    /// Medium priority
    Medium,
    /// High priority (default)
    #[default]
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high")),
        }
    }
}

impl Marker {
    /// Create a new marker with the default priority and no assignees
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            priority: Priority::default(),
            description: description.into(),
            assignees: Vec::new(),
        }
    }

    /// Create a new marker with all options
    #[must_use]
    pub fn with_options(
        priority: Priority,
        description: impl Into<String>,
        assignees: Vec<String>,
    ) -> Self {
        Self {
            priority,
            description: description.into(),
            assignees,
        }
    }

    /// Add assignees to the marker (builder style)
    #[must_use]
    pub fn assigned_to(mut self, assignees: &[&str]) -> Self {
        self.assignees.extend(assignees.iter().map(ToString::to_string));
        self
    }

    /// Render the assignee list as an ordered, bracketed, comma-separated list
    #[must_use]
    pub fn assignees_display(&self) -> String {
        format!("[{}]", self.assignees.join(", "))
    }
}
