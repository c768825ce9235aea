use super::schema::{AppConfig, PartialConfig};
use crate::search::settings::{
    DEFAULT_CREDENTIAL_URL, DEFAULT_FALLBACK_COOKIE, DEFAULT_SEARCH_URL, default_headers,
};

/// Results requested when neither the CLI nor a config file says otherwise.
pub const DEFAULT_LIMIT: usize = 10;

/// Per-request timeout for the credential document and result pages.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

impl PartialConfig {
    /// Merge self with a lower-priority fallback.
    /// Self's non-None values take precedence.
    /// For headers: REPLACE semantics (if self has Some, use it entirely).
    pub fn with_fallback(self, fallback: PartialConfig) -> PartialConfig {
        PartialConfig {
            default_limit: self.default_limit.or(fallback.default_limit),
            request_timeout_secs: self.request_timeout_secs.or(fallback.request_timeout_secs),
            search_url: self.search_url.or(fallback.search_url),
            credential_url: self.credential_url.or(fallback.credential_url),
            fallback_cookie: self.fallback_cookie.or(fallback.fallback_cookie),
            headers: self.headers.or(fallback.headers),
        }
    }

    /// Convert to AppConfig, filling any remaining gaps with defaults.
    pub fn finalize(self) -> AppConfig {
        AppConfig {
            default_limit: self.default_limit.unwrap_or(DEFAULT_LIMIT),
            request_timeout_secs: self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            search_url: self
                .search_url
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            credential_url: self
                .credential_url
                .unwrap_or_else(|| DEFAULT_CREDENTIAL_URL.to_string()),
            fallback_cookie: self
                .fallback_cookie
                .unwrap_or_else(|| DEFAULT_FALLBACK_COOKIE.to_string()),
            headers: self.headers.unwrap_or_else(default_headers),
        }
    }
}
