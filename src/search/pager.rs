//! Sequential page loop over Bing result pages.

use std::sync::Arc;

use super::extract::parse_results_page;
use super::observer::{Diagnostic, SearchObserver};
use super::settings::SearchSettings;
use super::transport::HttpFetch;
use super::types::{Credential, SearchOutcome, SearchResult, StopReason};
use crate::error::TransportError;

/// Results Bing serves per page; the `first` offset steps by this much.
pub const PAGE_SIZE: usize = 10;

/// 1-based offset of the first result on page `pn`.
pub fn page_offset(pn: usize) -> usize {
    1 + pn * PAGE_SIZE
}

/// Fetches result pages one at a time until enough records are collected
/// or a page comes back empty.
///
/// Holds no per-search state; concurrent calls to [`Pager::search`] are
/// independent.
pub struct Pager {
    http: Arc<dyn HttpFetch>,
    settings: Arc<SearchSettings>,
    observer: Arc<dyn SearchObserver>,
}

impl Pager {
    pub fn new(
        http: Arc<dyn HttpFetch>,
        settings: Arc<SearchSettings>,
        observer: Arc<dyn SearchObserver>,
    ) -> Self {
        Self {
            http,
            settings,
            observer,
        }
    }

    /// Collect up to `limit` results for `query`.
    ///
    /// A page with zero extractable records ends the loop with
    /// [`StopReason::Exhausted`]. Any transport error aborts the search and
    /// drops what was collected so far.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        credential: &Credential,
    ) -> Result<SearchOutcome, TransportError> {
        let headers = self.request_headers(credential);
        let mut results: Vec<SearchResult> = Vec::new();
        let mut pn = 0;
        let mut pages_fetched = 0;
        let mut stop = StopReason::Satisfied;

        while results.len() < limit {
            let offset = page_offset(pn);
            let body = self
                .http
                .get(
                    &self.settings.search_url,
                    &[("q", query.to_string()), ("first", offset.to_string())],
                    &headers,
                )
                .await?;

            pages_fetched += 1;

            let page = parse_results_page(&body);
            self.observer.notify(&Diagnostic::PageFetched {
                page: pn,
                offset,
                records: page.len(),
            });

            if page.is_empty() {
                self.observer.notify(&Diagnostic::Exhausted {
                    page: pn,
                    accumulated: results.len(),
                });
                stop = StopReason::Exhausted;
                break;
            }

            results.extend(page);
            pn += 1;
        }

        results.truncate(limit);

        Ok(SearchOutcome {
            results,
            stop,
            pages_fetched,
        })
    }

    /// Configured fingerprint followed by the credential as `Cookie`.
    fn request_headers(&self, credential: &Credential) -> Vec<(String, String)> {
        let mut headers = self.settings.headers.clone();
        headers.push(("Cookie".to_string(), credential.value.clone()));
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_step_by_page_size() {
        assert_eq!(page_offset(0), 1);
        assert_eq!(page_offset(1), 11);
        assert_eq!(page_offset(4), 41);
    }
}
