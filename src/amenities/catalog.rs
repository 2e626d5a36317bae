// src/amenities/catalog.rs

use crate::amenities::normalize_text;
use crate::errors::ScraperError;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

const BUILTIN_TAXONOMY: &str = include_str!("../../data/amenities_taxonomy.json");
const BUILTIN_SYNONYMS: &str = include_str!("../../data/amenities_synonyms.json");

static BUILTIN: OnceLock<Arc<AmenityCatalog>> = OnceLock::new();

/// Canonical amenity vocabulary plus the synonym table that feeds it.
///
/// Built once and never mutated; share it through `Arc`.
#[derive(Debug)]
pub struct AmenityCatalog {
    /// Flattened canonical labels, first occurrence wins.
    corpus: Vec<String>,
    members: HashSet<String>,
    /// `normalize_text(label)` for each corpus entry, same order.
    normalized_corpus: Vec<String>,
    /// Normalized label -> canonical label, first corpus entry wins.
    by_key: HashMap<String, String>,
    /// Normalized variant -> canonical label.
    synonyms: HashMap<String, String>,
}

impl AmenityCatalog {
    /// The catalog compiled into the binary. Loaded on first use and shared
    /// for the rest of the process.
    pub fn builtin() -> Arc<AmenityCatalog> {
        BUILTIN
            .get_or_init(|| {
                let catalog = Self::from_json_str(BUILTIN_TAXONOMY, BUILTIN_SYNONYMS)
                    .unwrap_or_else(|e| {
                        warn!(error = %e, "built-in amenity catalog unreadable, using empty catalog");
                        Self::from_parts(Vec::new(), HashMap::new())
                    });
                Arc::new(catalog)
            })
            .clone()
    }

    /// Load from a taxonomy file and a synonyms file (both JSON objects).
    pub fn load(taxonomy_path: &Path, synonyms_path: &Path) -> Result<Self, ScraperError> {
        let taxonomy = std::fs::read_to_string(taxonomy_path)
            .map_err(|e| ScraperError::Io(format!("{}: {e}", taxonomy_path.display())))?;
        let synonyms = std::fs::read_to_string(synonyms_path)
            .map_err(|e| ScraperError::Io(format!("{}: {e}", synonyms_path.display())))?;

        Self::from_json_str(&taxonomy, &synonyms)
    }

    pub fn from_json_str(taxonomy_json: &str, synonyms_json: &str) -> Result<Self, ScraperError> {
        let taxonomy = parse_taxonomy(taxonomy_json)?;
        let synonyms = parse_synonyms(synonyms_json)?;
        Ok(Self::from_parts(taxonomy, synonyms))
    }

    /// Build from in-memory tables. Synonym keys are normalized here.
    ///
    /// Synonyms are dropped when their target is not a corpus member, or
    /// when their key is the normalized form of a different canonical label.
    pub fn from_parts(
        taxonomy: Vec<(String, Vec<String>)>,
        raw_synonyms: HashMap<String, String>,
    ) -> Self {
        let mut corpus = Vec::new();
        let mut members = HashSet::new();
        for (_, labels) in &taxonomy {
            for label in labels {
                if members.insert(label.clone()) {
                    corpus.push(label.clone());
                }
            }
        }

        let normalized_corpus: Vec<String> = corpus.iter().map(|c| normalize_text(c)).collect();
        let mut by_key = HashMap::new();
        for (key, canonical) in normalized_corpus.iter().zip(&corpus) {
            by_key
                .entry(key.clone())
                .or_insert_with(|| canonical.clone());
        }

        let mut synonyms = HashMap::new();
        // Sorted so that load warnings come out in a stable order.
        let mut entries: Vec<_> = raw_synonyms.into_iter().collect();
        entries.sort();
        for (variant, canonical) in entries {
            let key = normalize_text(&variant);
            if key.is_empty() {
                continue;
            }
            if !members.contains(&canonical) {
                warn!(variant = %variant, target = %canonical, "synonym target is not a canonical amenity, dropping");
                continue;
            }
            if let Some(own) = by_key.get(&key) {
                if *own != canonical {
                    warn!(variant = %variant, target = %canonical, shadows = %own, "synonym shadows a canonical amenity, dropping");
                    continue;
                }
            }
            synonyms.insert(key, canonical);
        }

        debug!(
            categories = taxonomy.len(),
            canonical = corpus.len(),
            synonyms = synonyms.len(),
            "amenity catalog loaded"
        );

        Self {
            corpus,
            members,
            normalized_corpus,
            by_key,
            synonyms,
        }
    }

    /// The catalog's own copy of `label`, if it is a canonical amenity.
    pub fn member(&self, label: &str) -> Option<&str> {
        self.members.get(label).map(String::as_str)
    }

    /// Canonical label whose normalized spelling is exactly `normalized`.
    pub fn by_normalized(&self, normalized: &str) -> Option<&str> {
        self.by_key.get(normalized).map(String::as_str)
    }

    pub fn synonym(&self, normalized: &str) -> Option<&str> {
        self.synonyms.get(normalized).map(String::as_str)
    }

    /// `(canonical, normalized)` pairs in corpus order.
    pub fn normalized_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.corpus
            .iter()
            .zip(&self.normalized_corpus)
            .map(|(c, n)| (c.as_str(), n.as_str()))
    }
}

fn parse_taxonomy(json: &str) -> Result<Vec<(String, Vec<String>)>, ScraperError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ScraperError::JsonParse(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| ScraperError::Catalog("taxonomy must be a JSON object".into()))?;

    let mut out = Vec::with_capacity(obj.len());
    for (category, labels) in obj {
        let labels = labels.as_array().ok_or_else(|| {
            ScraperError::Catalog(format!("taxonomy category {category:?} is not a list"))
        })?;
        let labels = labels
            .iter()
            .filter_map(|l| l.as_str())
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();
        out.push((category.clone(), labels));
    }
    Ok(out)
}

fn parse_synonyms(json: &str) -> Result<HashMap<String, String>, ScraperError> {
    serde_json::from_str::<HashMap<String, String>>(json)
        .map_err(|e| ScraperError::Catalog(format!("synonyms must map strings to strings: {e}")))
}
