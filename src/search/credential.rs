//! Session cookie retrieval from a remote JSON document.
//!
//! The document is expected to look like
//! `{ "cookie": "...", "timestamp": 1718000000000 }`, where `timestamp` is
//! optional and may also be a date string. A fresh copy is fetched on every
//! search; nothing is cached between calls.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use super::observer::{Diagnostic, SearchObserver};
use super::settings::SearchSettings;
use super::transport::HttpFetch;
use super::types::{Credential, CredentialOrigin, Freshness, STALE_AFTER_HOURS};
use crate::error::CredentialError;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Fetch the credential document, falling back to the configured cookie on
/// any failure.
///
/// Never fails. A failure is reported as [`Diagnostic::CredentialFallback`]
/// and the returned credential has [`CredentialOrigin::Fallback`].
pub async fn obtain_credential(
    http: &dyn HttpFetch,
    settings: &SearchSettings,
    observer: &dyn SearchObserver,
) -> Credential {
    match fetch_credential(http, &settings.credential_url, observer).await {
        Ok(credential) => credential,
        Err(e) => {
            observer.notify(&Diagnostic::CredentialFallback {
                reason: e.to_string(),
            });
            Credential::fallback(settings.fallback_cookie.clone())
        }
    }
}

/// Fetch and parse the credential document at `document_url`.
///
/// Emits [`Diagnostic::CredentialLoaded`] when the document carries a
/// timestamp, and [`Diagnostic::CredentialStale`] when that timestamp is more
/// than [`STALE_AFTER_HOURS`] old. Staleness never rejects the cookie.
pub async fn fetch_credential(
    http: &dyn HttpFetch,
    document_url: &str,
    observer: &dyn SearchObserver,
) -> Result<Credential, CredentialError> {
    let body = http.get(document_url, &[], &[]).await?;
    let credential = parse_credential_document(&body)?;

    if let Some(issued_at) = credential.issued_at {
        let freshness = assess_freshness(issued_at, Utc::now());
        observer.notify(&Diagnostic::CredentialLoaded {
            issued_at,
            age_hours: freshness.age_hours,
        });
        if freshness.stale {
            observer.notify(&Diagnostic::CredentialStale {
                age_hours: freshness.age_hours,
            });
        }
    }

    Ok(credential)
}

/// Parse the JSON body of the credential document.
pub fn parse_credential_document(body: &str) -> Result<Credential, CredentialError> {
    let doc: Value =
        serde_json::from_str(body).map_err(|e| CredentialError::Malformed(e.to_string()))?;

    let value = doc
        .get("cookie")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .ok_or(CredentialError::MissingCookie)?
        .to_string();

    let issued_at = match doc.get("timestamp") {
        None | Some(Value::Null) => None,
        Some(ts) => parse_timestamp(ts)?,
    };

    Ok(Credential {
        value,
        issued_at,
        origin: CredentialOrigin::Remote,
    })
}

/// Interpret the `timestamp` field.
///
/// Numbers are milliseconds since the Unix epoch. Strings may be RFC 3339,
/// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`, all read as UTC. `0`, `""` and
/// `false` count as absent.
fn parse_timestamp(ts: &Value) -> Result<Option<DateTime<Utc>>, CredentialError> {
    let invalid = || CredentialError::InvalidTimestamp(ts.to_string());

    match ts {
        Value::Number(n) => {
            let millis = n.as_f64().filter(|m| m.is_finite()).ok_or_else(invalid)?;
            if millis == 0.0 {
                return Ok(None);
            }
            DateTime::from_timestamp_millis(millis as i64)
                .map(Some)
                .ok_or_else(invalid)
        }
        Value::Bool(false) => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => parse_date_string(s).map(Some).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Age of a credential in whole hours, rounded half up, and whether it is
/// past the staleness threshold. Future timestamps give negative ages.
pub fn assess_freshness(issued_at: DateTime<Utc>, now: DateTime<Utc>) -> Freshness {
    let millis = (now - issued_at).num_milliseconds() as f64;
    let age_hours = (millis / MILLIS_PER_HOUR + 0.5).floor() as i64;
    Freshness {
        age_hours,
        stale: age_hours > STALE_AFTER_HOURS,
    }
}
