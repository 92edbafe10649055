// src/fetch.rs

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::LookupError;

/// Fetch the published CSV as text.
///
/// The request carries no-cache headers so a genuine fetch always hits the
/// network; only the service's in-memory slot prevents repeat fetches
/// within a session. No retry and no timeout: a failure surfaces to the
/// caller, and the next user-triggered lookup fetches again.
pub async fn fetch_csv(client: &Client, url: &Url) -> Result<String, LookupError> {
    let resp = client
        .get(url.clone())
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await
        .map_err(|e| LookupError::FetchFailed {
            context: e.to_string(),
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(LookupError::FetchFailed {
            context: format!("HTTP {}", status.as_u16()),
        });
    }

    let text = resp.text().await.map_err(|e| LookupError::FetchFailed {
        context: e.to_string(),
    })?;
    debug!(bytes = text.len(), "fetched dataset");
    Ok(text)
}
