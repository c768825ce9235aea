//! HTTP GET seam shared by the credential provider and the pager.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::TransportError;

/// Issues a GET request and returns the response body as text.
///
/// Implementations must treat non-2xx responses as errors.
#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(String, String)],
    ) -> Result<String, TransportError>;
}

/// [`HttpFetch`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetch {
    client: reqwest::Client,
}

impl ReqwestFetch {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| TransportError::Request {
                url: String::new(),
                message: format!("failed to build client: {e}"),
            })?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpFetch for ReqwestFetch {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(String, String)],
    ) -> Result<String, TransportError> {
        let header_map = build_header_map(headers)?;

        let resp = self
            .client
            .get(url)
            .query(query)
            .headers(header_map)
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| TransportError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Convert configured `(name, value)` pairs into a header map, keeping
/// repeated names.
pub fn build_header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| TransportError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| TransportError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        map.append(header_name, header_value);
    }
    Ok(map)
}
