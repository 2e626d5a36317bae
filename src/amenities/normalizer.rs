// src/amenities/normalizer.rs

use crate::amenities::catalog::AmenityCatalog;
use crate::amenities::fuzzy::{ratio, token_set_ratio};
use crate::amenities::normalize_text;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::trace;

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 88.0;

/// Maps free-text amenity labels onto the catalog's canonical vocabulary.
///
/// Cheap to clone; the catalog is shared.
#[derive(Debug, Clone)]
pub struct AmenityNormalizer {
    catalog: Arc<AmenityCatalog>,
    threshold: f64,
}

impl AmenityNormalizer {
    pub fn new(catalog: Arc<AmenityCatalog>, threshold: f64) -> Self {
        Self { catalog, threshold }
    }

    pub fn builtin() -> Self {
        Self::new(AmenityCatalog::builtin(), DEFAULT_FUZZY_THRESHOLD)
    }

    /// Canonical labels for `labels`, de-duplicated and sorted ascending.
    /// Labels that match nothing are dropped.
    pub fn normalize<I, S>(&self, labels: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .filter_map(|label| self.canonicalize(label.as_ref()))
            .map(str::to_string)
            .collect()
    }

    /// Resolve a single label. Synonyms are consulted before anything else,
    /// so a synonym hit stands even if a fuzzy candidate would score higher.
    pub fn canonicalize(&self, label: &str) -> Option<&str> {
        let key = normalize_text(label);
        if key.is_empty() {
            return None;
        }

        if let Some(canonical) = self.catalog.synonym(&key) {
            return Some(canonical);
        }

        if let Some(canonical) = self.catalog.member(label) {
            return Some(canonical);
        }

        if let Some(canonical) = self.catalog.by_normalized(&key) {
            return Some(canonical);
        }

        self.best_fuzzy_match(&key)
    }

    /// Highest token-set score wins. Equal scores are broken by the plain
    /// indel ratio of the whole strings, then by corpus order.
    fn best_fuzzy_match(&self, key: &str) -> Option<&str> {
        let mut best: Option<(&str, &str, f64)> = None;
        for (canonical, normalized) in self.catalog.normalized_entries() {
            let score = token_set_ratio(key, normalized);
            let better = match best {
                None => true,
                Some((_, _, s)) if score != s => score > s,
                Some((_, held, _)) => ratio(key, normalized) > ratio(key, held),
            };
            if better {
                best = Some((canonical, normalized, score));
            }
        }

        match best {
            Some((canonical, _, score)) if score >= self.threshold => {
                trace!(label = %key, canonical, score, "fuzzy amenity match");
                Some(canonical)
            }
            _ => None,
        }
    }
}
