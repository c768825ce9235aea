//! Rendering of search outcomes for the command line.

use crate::search::{Credential, CredentialOrigin, SearchResult};
use chrono::Utc;

/// Pretty-printed JSON array of results.
pub fn render_json(results: &[SearchResult]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Numbered plain-text listing, one blank line between results.
pub fn render_text(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n   {}\n", i + 1, r.title, r.url));
        if !r.source.is_empty() {
            out.push_str(&format!("   [{}]\n", r.source));
        }
        if !r.description.is_empty() {
            out.push_str(&format!("   {}\n", r.description));
        }
    }
    out
}

/// One-line summary of where a credential came from and how old it is.
pub fn describe_credential(credential: &Credential) -> String {
    let origin = match credential.origin {
        CredentialOrigin::Remote => "remote",
        CredentialOrigin::Fallback => "fallback",
    };
    match credential.issued_at {
        Some(issued_at) => {
            let age = crate::search::credential::assess_freshness(issued_at, Utc::now());
            format!(
                "origin: {origin}\nissued: {}\nage: {}h{}\nlength: {} bytes",
                issued_at.to_rfc3339(),
                age.age_hours,
                if age.stale { " (stale)" } else { "" },
                credential.value.len()
            )
        }
        None => format!(
            "origin: {origin}\nissued: unknown\nlength: {} bytes",
            credential.value.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ENGINE;

    fn result(title: &str, source: &str, description: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: format!("https://{}.example", title.to_lowercase()),
            description: description.to_string(),
            source: source.to_string(),
            engine: ENGINE.to_string(),
        }
    }

    #[test]
    fn text_listing_numbers_results() {
        let text = render_text(&[
            result("Alpha", "alpha.example", "First"),
            result("Beta", "", ""),
        ]);
        assert_eq!(
            text,
            "1. Alpha\n   https://alpha.example\n   [alpha.example]\n   First\n\n2. Beta\n   https://beta.example\n"
        );
    }

    #[test]
    fn json_listing_is_array() {
        let json = render_json(&[result("Alpha", "", "")]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["title"], "Alpha");
        assert_eq!(parsed[0]["engine"], "bing");
    }

    #[test]
    fn fallback_credential_description() {
        let text = describe_credential(&Credential::fallback("abc"));
        assert!(text.contains("origin: fallback"));
        assert!(text.contains("issued: unknown"));
        assert!(text.contains("length: 3 bytes"));
    }
}
