// src/classify.rs
//! Hours/status classification policy and its display adapters.

use serde::Serialize;

/// Hours threshold at which a record counts as completed.
pub const COMPLETED_HOURS: f64 = 65.0;

/// Three-way outcome for a record. The set is closed: every row maps to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Completed,
    InProgress,
    NotFoundOrIncomplete,
}

/// Presentation tag the rendering layer maps onto styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Success,
    Warn,
    Error,
}

impl StyleTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Success => "success",
            StyleTag::Warn => "warn",
            StyleTag::Error => "error",
        }
    }
}

impl Classification {
    /// Display message shown for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Classification::Completed => "✅ Completed 65 hours",
            Classification::InProgress => "⚠️ In progress",
            Classification::NotFoundOrIncomplete => "❌ No record found Or Status is Incomplete",
        }
    }

    pub fn style(self) -> StyleTag {
        match self {
            Classification::Completed => StyleTag::Success,
            Classification::InProgress => StyleTag::Warn,
            Classification::NotFoundOrIncomplete => StyleTag::Error,
        }
    }
}

/// Extract a numeric hours value from free-text cell contents.
///
/// Everything that is not an ASCII digit or a period is stripped before
/// parsing; whatever still fails to parse counts as zero hours, never an
/// error.
pub fn parse_hours(raw: &str) -> f64 {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    filtered.parse().unwrap_or(0.0)
}

/// Classify a record from its raw hours and status cells.
///
/// The rules overlap at the boundary, so the order is load-bearing:
/// exactly 65 hours is Completed, and status text saying "completed"
/// overrides a zero hours cell.
pub fn classify(hours_raw: &str, status_raw: &str) -> Classification {
    let hours = parse_hours(hours_raw);
    let status = status_raw.to_lowercase();

    if hours >= COMPLETED_HOURS || status.contains("completed") {
        Classification::Completed
    } else if (hours > 0.0 && hours < COMPLETED_HOURS)
        || status.contains("in progress")
        || status.contains("in-progress")
    {
        Classification::InProgress
    } else {
        Classification::NotFoundOrIncomplete
    }
}
