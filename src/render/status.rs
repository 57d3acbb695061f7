//! Status label and color mapping.

use colored::Color;

use crate::models::ImportStatus;

/// Display label and color for a synchronization status.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    /// Human-readable label.
    pub label: String,
    /// Terminal color the label is painted with.
    pub color: Color,
}

/// Maps a status to its fixed label/color pair.
///
/// Unknown statuses pass through as their raw value with a neutral color;
/// they are never an error.
pub fn status_badge(status: &ImportStatus) -> StatusBadge {
    let (label, color) = match status {
        ImportStatus::Success => ("Success".to_string(), Color::Green),
        ImportStatus::Failure => ("Failure".to_string(), Color::Red),
        ImportStatus::Running => ("Running".to_string(), Color::Yellow),
        ImportStatus::Other(raw) => (raw.clone(), Color::White),
    };
    StatusBadge { label, color }
}
