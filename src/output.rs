//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a task report: declarations carrying structured markers
#[derive(Debug, Serialize)]
pub struct TaskReport {
    /// Declarations that carried at least one marker, in scan order
    pub matches: Vec<TaskMatch>,
}

/// A declaration matched by the task report
#[derive(Debug, Serialize)]
pub struct TaskMatch {
    /// The declaration header (e.g., "method NuclearPlant::not_in_use")
    pub declaration: String,
    /// Structured markers attached to it, in attachment order
    pub markers: Vec<MarkerInfo>,
}

/// Fields of one structured marker
#[derive(Debug, Serialize)]
pub struct MarkerInfo {
    /// Marker description
    pub description: String,
    /// Priority level
    pub priority: String,
    /// Assignee names, in declaration order
    pub assignees: Vec<String>,
}

/// Result of inspecting a type: every declaration with all its annotations
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// The inspected type name
    pub subject: String,
    /// One entry per declaration, headers included even with no annotations
    pub entries: Vec<InspectEntry>,
}

/// One declaration in an inspection report
#[derive(Debug, Serialize)]
pub struct InspectEntry {
    /// The declaration header
    pub declaration: String,
    /// Rendered annotations, in attachment order (may be empty)
    pub annotations: Vec<String>,
}

/// Result of validating a registry file
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether the registry file satisfied all invariants
    pub valid: bool,
    /// The file that was validated
    pub file: String,
    /// Number of declarations in the file
    pub declarations: usize,
    /// Number of attached annotations in the file
    pub annotations: usize,
    /// The first invariant violation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl TaskReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for m in &self.matches {
            println!("Task marker for '{}':", m.declaration);
            for marker in &m.markers {
                println!("  Description: {}", marker.description);
                println!("  Priority: {}", marker.priority);
                println!("  Assigned to: [{}]", marker.assignees.join(", "));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl InspectReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for entry in &self.entries {
            println!("Annotations for '{}':", entry.declaration);
            for annotation in &entry.annotations {
                println!("  {annotation}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.valid {
            println!("{}: OK", self.file);
            println!(
                "  {} declaration(s), {} annotation(s)",
                self.declarations, self.annotations
            );
        } else {
            println!("{}: INVALID", self.file);
            if let Some(error) = &self.error {
                println!("  {error}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
