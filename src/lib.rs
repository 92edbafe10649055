//! Volunteer-hours completion status lookup.
//!
//! Fetches a published spreadsheet CSV once per session, parses it
//! tolerantly, resolves which columns hold the registration number, name,
//! hours, and status across the sheet's naming variants, and classifies a
//! queried registration number as completed, in progress, or not found.

pub mod classify;
pub mod columns;
pub mod error;
pub mod fetch;
pub mod lookup;
pub mod table;

pub use classify::{classify, parse_hours, Classification, StyleTag};
pub use columns::{resolve_column, ColumnIndex};
pub use error::LookupError;
pub use lookup::{find_row, LookupOutcome, StatusService, DEFAULT_CSV_URL};
pub use table::{parse_csv, RawTable};
