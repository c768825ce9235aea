use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier stamped on every record extracted by this crate.
pub const ENGINE: &str = "bing";

/// Credentials older than this many hours trigger a staleness warning.
pub const STALE_AFTER_HOURS: i64 = 48;

/// A single search result extracted from a Bing result block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub description: String,
    pub source: String,
    pub engine: String,
}

/// Where a [`Credential`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialOrigin {
    /// Read from the remote credential document.
    Remote,
    /// The configured fallback cookie, used when the document could not be read.
    Fallback,
}

/// Session cookie sent with every result page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub value: String,
    pub issued_at: Option<DateTime<Utc>>,
    pub origin: CredentialOrigin,
}

impl Credential {
    pub fn fallback(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            issued_at: None,
            origin: CredentialOrigin::Fallback,
        }
    }
}

/// How old a credential is, and whether that is old enough to warn about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Freshness {
    pub age_hours: i64,
    pub stale: bool,
}

/// Why the page loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// `limit` records were collected.
    Satisfied,
    /// A page yielded no records: no more results, or the endpoint served a
    /// block/CAPTCHA page. The two cannot be told apart.
    Exhausted,
}

/// The records of one search together with how the search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub stop: StopReason,
    pub pages_fetched: usize,
}

impl SearchOutcome {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            stop: StopReason::Satisfied,
            pages_fetched: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serializes_to_json() {
        let result = SearchResult {
            title: "Test".to_string(),
            url: "https://example.com".to_string(),
            description: "A test result".to_string(),
            source: "example.com".to_string(),
            engine: ENGINE.to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"title\":\"Test\""));
        assert!(json.contains("\"url\":\"https://example.com\""));
        assert!(json.contains("\"description\":\"A test result\""));
        assert!(json.contains("\"engine\":\"bing\""));
    }

    #[test]
    fn fallback_credential_has_no_issue_time() {
        let cred = Credential::fallback("a=b");
        assert_eq!(cred.value, "a=b");
        assert_eq!(cred.origin, CredentialOrigin::Fallback);
        assert!(cred.issued_at.is_none());
    }
}
