use serde::Deserialize;
use std::collections::BTreeMap;

/// The TOML file structure for bingserp.toml.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub general: Option<GeneralConfig>,
    pub credential: Option<CredentialConfig>,
    pub search: Option<SearchConfig>,
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    pub default_limit: Option<usize>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CredentialConfig {
    /// URL of the JSON document holding `cookie` and `timestamp`.
    pub url: Option<String>,
    pub fallback_cookie: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchConfig {
    pub url: Option<String>,
    /// If specified, fully replaces the default header fingerprint.
    pub headers: Option<BTreeMap<String, String>>,
}

/// Fully-resolved runtime configuration. All fields have values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_limit: usize,
    pub request_timeout_secs: u64,
    pub search_url: String,
    pub credential_url: String,
    pub fallback_cookie: String,
    pub headers: Vec<(String, String)>,
}

/// Partial config used during merge. All fields are Option so that
/// missing fields don't override lower-priority values.
#[derive(Debug, Clone, Default)]
pub struct PartialConfig {
    pub default_limit: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub search_url: Option<String>,
    pub credential_url: Option<String>,
    pub fallback_cookie: Option<String>,
    pub headers: Option<Vec<(String, String)>>,
}

impl ConfigFile {
    /// Flatten the sectioned file layout into a [`PartialConfig`].
    pub fn to_partial(self) -> PartialConfig {
        let general = self.general;
        let credential = self.credential;
        let search = self.search;

        PartialConfig {
            default_limit: general.as_ref().and_then(|g| g.default_limit),
            request_timeout_secs: general.as_ref().and_then(|g| g.request_timeout_secs),
            credential_url: credential.as_ref().and_then(|c| c.url.clone()),
            fallback_cookie: credential.and_then(|c| c.fallback_cookie),
            search_url: search.as_ref().and_then(|s| s.url.clone()),
            headers: search
                .and_then(|s| s.headers)
                .map(|h| h.into_iter().collect()),
        }
    }
}
