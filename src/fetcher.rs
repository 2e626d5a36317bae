// fetcher.rs
use crate::errors::ScraperError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Response of a single GET after redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP seam. Implementations follow redirects and honour the
/// timeout; they do not retry. Any HTTP response, whatever its status, is
/// `Ok`; only transport failures are errors.
pub trait HttpFetch: Send + Sync {
    fn get(&self, url: &str, timeout: Duration) -> Result<FetchedPage, ScraperError>;
}

pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<FetchedPage, ScraperError> {
        let start = std::time::Instant::now();

        let resp = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let final_url = resp.url().to_string();

        let body = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        debug!(url, final_url = %final_url, status, elapsed = ?start.elapsed(), bytes = body.len(), "fetched page");

        Ok(FetchedPage {
            final_url,
            status,
            body,
        })
    }
}
