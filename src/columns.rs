// src/columns.rs
//! Maps the sheet's header spellings onto the four logical fields.
//!
//! Published sheets drift in how they label columns, so each logical field
//! has a fixed list of accepted spellings tried in priority order.

/// Accepted spellings for the registration-number column.
pub static REGISTRATION_CANDIDATES: &[&str] = &[
    "Registration#",
    "Registration No",
    "Registration Number",
    "Reg No",
    "Reg",
];

/// Accepted spellings for the student-name column.
pub static NAME_CANDIDATES: &[&str] = &["Name", "Student Name", "Full Name"];

/// Accepted spellings for the hours column. The trailing-space variant
/// shows up in real exports.
pub static HOURS_CANDIDATES: &[&str] = &[
    "Hours Completed",
    "Hours",
    "HoursCompleted",
    "Hours Completed ",
];

/// Accepted spellings for the status column.
pub static STATUS_CANDIDATES: &[&str] = &["Status", "Completion Status", "Record Status"];

/// Resolved zero-based column positions for the logical fields.
///
/// Only the registration column is mandatory for a lookup; an unresolved
/// optional field reads as an empty string for every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnIndex {
    pub registration: Option<usize>,
    pub name: Option<usize>,
    pub hours: Option<usize>,
    pub status: Option<usize>,
}

impl ColumnIndex {
    /// Resolve all four logical fields against a header row.
    pub fn resolve(header: &[String]) -> Self {
        Self {
            registration: resolve_column(header, REGISTRATION_CANDIDATES),
            name: resolve_column(header, NAME_CANDIDATES),
            hours: resolve_column(header, HOURS_CANDIDATES),
            status: resolve_column(header, STATUS_CANDIDATES),
        }
    }
}

/// Case-insensitive exact match of each candidate, in order, against the
/// header. The first header position matching any candidate wins, so
/// candidate priority beats header position.
pub fn resolve_column(header: &[String], candidates: &[&str]) -> Option<usize> {
    let lowered: Vec<String> = header.iter().map(|h| h.to_lowercase()).collect();
    candidates.iter().find_map(|cand| {
        let cand = cand.to_lowercase();
        lowered.iter().position(|h| *h == cand)
    })
}
