#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bingserp::error::TransportError;
use bingserp::search::{BingSearch, HttpFetch, RecordingObserver, SearchSettings};

pub const SEARCH_URL: &str = "https://bing.test/search";
pub const CREDENTIAL_URL: &str = "https://gist.test/bing_cookies.json";
pub const FALLBACK: &str = "SRCHHPGUSR=SRCHLANG=en; _EDGE_S=ui=en; _EDGE_V=1";

/// A canned response for one request.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
}

/// One request as seen by [`FakeHttp`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl Recorded {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Scripted transport: one reply for the credential document, a queue of
/// replies for result pages. Running out of page replies is an error so
/// over-fetching shows up in tests.
pub struct FakeHttp {
    credential: Reply,
    pages: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<Recorded>>,
}

impl FakeHttp {
    pub fn new(credential: Reply, pages: Vec<Reply>) -> Self {
        Self {
            credential,
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn page_requests(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.url == SEARCH_URL)
            .collect()
    }
}

#[async_trait]
impl HttpFetch for FakeHttp {
    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        headers: &[(String, String)],
    ) -> Result<String, TransportError> {
        self.requests.lock().unwrap().push(Recorded {
            url: url.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            headers: headers.to_vec(),
        });

        let reply = if url == CREDENTIAL_URL {
            self.credential.clone()
        } else {
            match self.pages.lock().unwrap().pop_front() {
                Some(reply) => reply,
                None => {
                    return Err(TransportError::Request {
                        url: url.to_string(),
                        message: "no scripted response left".to_string(),
                    });
                }
            }
        };

        match reply {
            Reply::Body(body) => Ok(body),
            Reply::Status(status) => Err(TransportError::Status {
                url: url.to_string(),
                status,
            }),
        }
    }
}

pub fn test_settings() -> SearchSettings {
    SearchSettings {
        search_url: SEARCH_URL.to_string(),
        credential_url: CREDENTIAL_URL.to_string(),
        fallback_cookie: FALLBACK.to_string(),
        headers: vec![
            ("User-Agent".to_string(), "test-agent".to_string()),
            ("Accept".to_string(), "*/*".to_string()),
        ],
    }
}

pub fn searcher(http: Arc<FakeHttp>, observer: Arc<RecordingObserver>) -> BingSearch {
    BingSearch::new(http, test_settings(), observer)
}

pub fn cookie_doc(cookie: &str) -> Reply {
    Reply::Body(format!(r#"{{"cookie": "{cookie}"}}"#))
}

/// A result page with `count` well-formed blocks numbered from `start`.
pub fn results_page(start: usize, count: usize) -> Reply {
    let blocks: String = (start..start + count)
        .map(|i| {
            format!(
                r#"<li class="b_algo">
                    <div class="b_tpcn"><a class="tilk" href="https://site{i}.example/"><div class="tptt">site{i}.example</div></a></div>
                    <h2><a href="https://site{i}.example/">Result {i}</a></h2>
                    <div class="b_caption"><p>Snippet {i}</p></div>
                </li>"#
            )
        })
        .collect();
    Reply::Body(wrap_results(&blocks))
}

/// A page whose results container holds nothing extractable.
pub fn empty_page() -> Reply {
    Reply::Body(wrap_results(
        r#"<li class="b_pag"><a href="/search?q=x&first=11">Next</a></li>"#,
    ))
}

/// What Bing serves instead of results when it decides the client is a bot.
pub fn captcha_page() -> Reply {
    Reply::Body(
        r#"<html><body><div id="b_captcha"><h2>One last step</h2><a href="/challenge">Verify</a></div></body></html>"#
            .to_string(),
    )
}

pub fn wrap_results(blocks: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Bing</title></head><body>
        <header id="b_header"></header>
        <div id="b_content"><main aria-label="Search Results"><ol id="b_results">{blocks}</ol></main></div>
        </body></html>"#
    )
}
