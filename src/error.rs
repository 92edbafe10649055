// src/error.rs

use thiserror::Error;

use crate::classify::StyleTag;

/// Failures a lookup can surface.
///
/// Every variant is recoverable: each maps to a user-visible message and
/// the `error` style tag, and none of them populates the dataset cache, so
/// a later lookup retries the fetch naturally.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Non-success response or transport failure from the CSV endpoint.
    /// `context` is `HTTP <status>` for a non-success response, or the
    /// transport error text.
    #[error("Could not fetch data ({context})")]
    FetchFailed { context: String },

    /// The header row contains no accepted registration-column spelling.
    #[error("CSV header does not contain a Registration# column. Please ensure the first row uses the expected headers.")]
    MissingRegistrationColumn,

    /// The caller passed a blank identifier; rejected before any fetch.
    #[error("Please enter registration number")]
    EmptyQuery,
}

impl LookupError {
    /// All error kinds render with the neutral error styling.
    pub fn style(&self) -> StyleTag {
        StyleTag::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let err = LookupError::FetchFailed {
            context: "HTTP 404".to_string(),
        };
        assert_eq!(err.to_string(), "Could not fetch data (HTTP 404)");
        assert_eq!(
            LookupError::EmptyQuery.to_string(),
            "Please enter registration number"
        );
        assert_eq!(err.style(), StyleTag::Error);
        assert_eq!(LookupError::EmptyQuery.style(), StyleTag::Error);
    }
}
