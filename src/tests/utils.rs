// src/tests/utils.rs

use crate::amenities::{AmenityCatalog, AmenityNormalizer, DEFAULT_FUZZY_THRESHOLD};
use crate::config::ExtractorConfig;
use crate::errors::ScraperError;
use crate::extract::ListingExtractor;
use crate::fetcher::{FetchedPage, HttpFetch};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const SAMPLE_NEXT_DATA: &str = include_str!("fixtures/sample_next_data.json");
pub const SAMPLE_LISTING_HTML: &str = include_str!("fixtures/sample_listing.html");
pub const MARKUP_ONLY_HTML: &str = include_str!("fixtures/markup_only.html");

pub fn sample_state() -> Value {
    serde_json::from_str(SAMPLE_NEXT_DATA).expect("fixture is valid JSON")
}

/// Extractor over the built-in catalog with default settings.
pub fn default_extractor() -> ListingExtractor {
    ListingExtractor::new(ExtractorConfig::default(), AmenityNormalizer::builtin())
}

/// Catalog built from literal tables, for tests that need a known vocabulary.
pub fn small_catalog(taxonomy: &[(&str, &[&str])], synonyms: &[(&str, &str)]) -> Arc<AmenityCatalog> {
    let taxonomy = taxonomy
        .iter()
        .map(|(cat, labels)| (cat.to_string(), labels.iter().map(|l| l.to_string()).collect()))
        .collect();
    let synonyms: HashMap<String, String> = synonyms
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(AmenityCatalog::from_parts(taxonomy, synonyms))
}

pub fn small_normalizer(
    taxonomy: &[(&str, &[&str])],
    synonyms: &[(&str, &str)],
) -> AmenityNormalizer {
    AmenityNormalizer::new(small_catalog(taxonomy, synonyms), DEFAULT_FUZZY_THRESHOLD)
}

/// Canned response (or failure) standing in for the network.
pub struct StubFetcher {
    response: Result<FetchedPage, String>,
    pub calls: AtomicUsize,
}

impl StubFetcher {
    pub fn page(final_url: &str, body: &str) -> Self {
        Self::with_status(final_url, 200, body)
    }

    pub fn with_status(final_url: &str, status: u16, body: &str) -> Self {
        Self {
            response: Ok(FetchedPage {
                final_url: final_url.to_string(),
                status,
                body: body.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpFetch for StubFetcher {
    fn get(&self, _url: &str, _timeout: Duration) -> Result<FetchedPage, ScraperError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(ScraperError::Network)
    }
}
