use crate::config::AppConfig;

/// Bing result page endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://www.bing.com/search";

/// Raw gist holding the periodically refreshed Bing cookie document.
pub const DEFAULT_CREDENTIAL_URL: &str = "https://gist.githubusercontent.com/Aas-ee/dfaebdeb82052a17036e071b463e10f0/raw/6ec7c1e263568100c1cae4576b2d94e50b2f3218/bing_cookies.json";

/// Minimal cookie set used when the credential document cannot be read.
/// Searches still run with it, though Bing blocks them more often.
pub const DEFAULT_FALLBACK_COOKIE: &str = "SRCHHPGUSR=SRCHLANG=en; _EDGE_S=ui=en; _EDGE_V=1";

/// Request header fingerprint of a Chrome 112 desktop client on Windows.
///
/// `Cookie` is deliberately absent; the pager injects the credential.
pub fn default_headers() -> Vec<(String, String)> {
    [
        ("authority", "www.bing.com"),
        ("ect", "3g"),
        ("pragma", "no-cache"),
        ("sec-ch-ua-arch", "\"x86\""),
        ("sec-ch-ua-bitness", "\"64\""),
        ("sec-ch-ua-full-version", "\"112.0.5615.50\""),
        (
            "sec-ch-ua-full-version-list",
            "\"Chromium\";v=\"112.0.5615.50\", \"Google Chrome\";v=\"112.0.5615.50\", \"Not:A-Brand\";v=\"99.0.0.0\"",
        ),
        ("sec-ch-ua-model", "\"\""),
        ("sec-ch-ua-platform-version", "\"15.0.0\""),
        ("sec-fetch-user", "?1"),
        ("upgrade-insecure-requests", "1"),
        (
            "User-Agent",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36",
        ),
        ("Accept", "*/*"),
        ("Host", "cn.bing.com"),
        ("Connection", "keep-alive"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

/// Endpoints, fallback cookie and header fingerprint used by one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    pub search_url: String,
    pub credential_url: String,
    pub fallback_cookie: String,
    /// Sent with every page request, in order, followed by `Cookie`.
    pub headers: Vec<(String, String)>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            credential_url: DEFAULT_CREDENTIAL_URL.to_string(),
            fallback_cookie: DEFAULT_FALLBACK_COOKIE.to_string(),
            headers: default_headers(),
        }
    }
}

impl SearchSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            search_url: config.search_url.clone(),
            credential_url: config.credential_url.clone(),
            fallback_cookie: config.fallback_cookie.clone(),
            headers: config.headers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_exclude_cookie() {
        let headers = default_headers();
        assert!(!headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("cookie")));
        assert!(headers.iter().any(|(name, _)| name == "User-Agent"));
    }

    #[test]
    fn default_fallback_cookie_is_not_empty() {
        let settings = SearchSettings::default();
        assert!(!settings.fallback_cookie.is_empty());
        assert_eq!(settings.search_url, DEFAULT_SEARCH_URL);
    }
}
