//! Bing result retrieval: credential lookup followed by the page loop.
//!
//! [`BingSearch`] wires a transport, the [`SearchSettings`] and an observer
//! together. Each [`BingSearch::perform_search`] call fetches a fresh
//! credential and owns its own cursor and accumulator, so one instance can
//! serve concurrent queries.

pub mod credential;
pub mod extract;
pub mod observer;
pub mod pager;
pub mod settings;
pub mod transport;
pub mod types;

use std::sync::Arc;

pub use credential::{fetch_credential, obtain_credential};
pub use observer::{Diagnostic, RecordingObserver, SearchObserver, TracingObserver};
pub use pager::Pager;
pub use settings::SearchSettings;
pub use transport::{HttpFetch, ReqwestFetch};
pub use types::*;

use crate::config::AppConfig;
use crate::error::TransportError;

pub struct BingSearch {
    http: Arc<dyn HttpFetch>,
    settings: Arc<SearchSettings>,
    observer: Arc<dyn SearchObserver>,
    pager: Pager,
}

impl BingSearch {
    pub fn new(
        http: Arc<dyn HttpFetch>,
        settings: SearchSettings,
        observer: Arc<dyn SearchObserver>,
    ) -> Self {
        let settings = Arc::new(settings);
        let pager = Pager::new(http.clone(), settings.clone(), observer.clone());
        Self {
            http,
            settings,
            observer,
            pager,
        }
    }

    /// Build a searcher with the reqwest transport and tracing diagnostics.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let http = ReqwestFetch::new(config.request_timeout_secs)?;
        Ok(Self::new(
            Arc::new(http),
            SearchSettings::from_config(config),
            Arc::new(TracingObserver),
        ))
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Fetch the credential (or fall back) and collect up to `limit` results.
    ///
    /// `limit == 0` returns an empty outcome without touching the network.
    pub async fn perform_search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<SearchOutcome, TransportError> {
        if limit == 0 {
            return Ok(SearchOutcome::empty());
        }
        let credential = self.credential().await;
        self.search_with(query, limit, &credential).await
    }

    /// Run the page loop with an already obtained credential.
    pub async fn search_with(
        &self,
        query: &str,
        limit: usize,
        credential: &Credential,
    ) -> Result<SearchOutcome, TransportError> {
        tracing::debug!(query, limit, origin = ?credential.origin, "Starting Bing search");
        let outcome = self.pager.search(query, limit, credential).await?;
        tracing::info!(
            query,
            results = outcome.results.len(),
            pages = outcome.pages_fetched,
            stop = ?outcome.stop,
            "Bing search finished"
        );
        Ok(outcome)
    }

    /// Fetch the remote credential, substituting the fallback cookie on failure.
    pub async fn credential(&self) -> Credential {
        obtain_credential(self.http.as_ref(), &self.settings, self.observer.as_ref()).await
    }
}
