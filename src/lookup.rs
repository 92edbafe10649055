// src/lookup.rs

use reqwest::Client;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{info, instrument};
use url::Url;

use crate::classify::{classify, parse_hours, Classification, StyleTag};
use crate::columns::ColumnIndex;
use crate::error::LookupError;
use crate::fetch::fetch_csv;
use crate::table::{parse_csv, RawTable};

/// Published CSV endpoint for the volunteer-hours sheet.
pub const DEFAULT_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQAlPiSLTrsIzp8K12t-gfCCuWApaNiRAJ1PvlhK6yDddpN9fgtIjuwZM8oPhQCLbMkyqeuquz0tjBI/pub?output=csv";

/// One lookup's answer: the verdict plus whatever row metadata the sheet
/// had for the student. Absence of a row and "row exists but incomplete"
/// both produce the `NotFoundOrIncomplete` outcome, with no metadata for
/// the former.
#[derive(Debug, Clone, Serialize)]
pub struct LookupOutcome {
    pub classification: Classification,
    pub message: &'static str,
    pub style: StyleTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_raw: Option<String>,
}

impl LookupOutcome {
    fn from_classification(classification: Classification) -> Self {
        Self {
            classification,
            message: classification.message(),
            style: classification.style(),
            name: None,
            hours: None,
            status_raw: None,
        }
    }

    fn not_found() -> Self {
        Self::from_classification(Classification::NotFoundOrIncomplete)
    }

    /// Plain-text rendering of the row metadata shown under the verdict.
    /// Escaping for markup is the rendering layer's job.
    pub fn meta_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(format!("Name: {name}"));
        }
        if let Some(hours) = self.hours {
            parts.push(format!("Hours: {hours}"));
        }
        if let Some(status) = &self.status_raw {
            parts.push(format!("Raw status: {status}"));
        }
        parts.join(" | ")
    }
}

/// The parsed table plus its column resolution, computed once per fetch.
#[derive(Debug)]
struct Dataset {
    table: RawTable,
    columns: ColumnIndex,
}

/// Looks up volunteer-hour completion status against the published sheet.
///
/// Constructed once and queried many times. The first successful fetch
/// parses the CSV and resolves columns, and that dataset stays cached for
/// the service's lifetime; concurrent first lookups share a single
/// in-flight fetch, and a failed fetch leaves the slot empty so the next
/// lookup retries.
pub struct StatusService {
    client: Client,
    url: Url,
    cache: OnceCell<Dataset>,
}

impl StatusService {
    pub fn new(client: Client, url: Url) -> Self {
        Self {
            client,
            url,
            cache: OnceCell::new(),
        }
    }

    /// Service pointed at the published sheet.
    pub fn with_default_endpoint() -> Self {
        let url = Url::parse(DEFAULT_CSV_URL).expect("default CSV endpoint URL should be valid");
        Self::new(Client::new(), url)
    }

    /// Warm the cache so the first check is fast. A failure is reported
    /// but not cached; the first real lookup will fetch again.
    pub async fn preload(&self) -> Result<(), LookupError> {
        self.dataset().await.map(|_| ())
    }

    async fn dataset(&self) -> Result<&Dataset, LookupError> {
        self.cache
            .get_or_try_init(|| async {
                let text = fetch_csv(&self.client, &self.url).await?;
                let table = parse_csv(&text);
                let columns = ColumnIndex::resolve(&table.header);
                info!(rows = table.rows.len(), "dataset cached");
                Ok(Dataset { table, columns })
            })
            .await
    }

    /// Look up one registration number.
    ///
    /// A blank query is rejected before any fetch or parse work. A header
    /// without a registration column is fatal for the lookup, but the
    /// fetched table stays cached, so retrying cannot fix it within a
    /// session.
    #[instrument(level = "info", skip(self))]
    pub async fn lookup(&self, query: &str) -> Result<LookupOutcome, LookupError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        let dataset = self.dataset().await?;
        let reg_index = dataset
            .columns
            .registration
            .ok_or(LookupError::MissingRegistrationColumn)?;

        let row = match find_row(&dataset.table, reg_index, query) {
            Some(row) => row,
            None => return Ok(LookupOutcome::not_found()),
        };

        let cols = &dataset.columns;
        let hours_raw = field(row, cols.hours);
        let status_raw = field(row, cols.status);
        let name_raw = field(row, cols.name);

        let mut outcome = LookupOutcome::from_classification(classify(hours_raw, status_raw));
        if !name_raw.is_empty() {
            outcome.name = Some(name_raw.to_string());
        }
        if cols.hours.is_some() {
            outcome.hours = Some(parse_hours(hours_raw));
        }
        if !status_raw.is_empty() {
            outcome.status_raw = Some(status_raw.to_string());
        }
        Ok(outcome)
    }
}

/// Cell for an optional resolved column; a missing column or a row shorter
/// than the header reads as empty.
fn field(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

/// First row (in sheet order) whose registration cell matches the query,
/// compared trimmed and case-insensitively. Rows with a blank registration
/// cell are skipped. Callers reject blank queries before this point, so a
/// blank query never matches every skipped cell.
pub fn find_row<'a>(table: &'a RawTable, reg_index: usize, query: &str) -> Option<&'a [String]> {
    let query = query.trim().to_lowercase();
    table
        .rows
        .iter()
        .find(|row| {
            let cell = row.get(reg_index).map(String::as_str).unwrap_or("").trim();
            !cell.is_empty() && cell.to_lowercase() == query
        })
        .map(Vec::as_slice)
}
