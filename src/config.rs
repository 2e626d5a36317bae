// src/config.rs
use crate::amenities::DEFAULT_FUZZY_THRESHOLD;
use crate::errors::ScraperError;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Photos kept per listing, first-seen order.
    pub max_photos: usize,
    /// Photos whose smaller side is below this are dropped (only when both
    /// dimensions are known).
    pub min_photo_side_px: i64,
    /// Token-set score (0-100) a fuzzy amenity match must reach.
    pub fuzzy_threshold: f64,
    /// Timeout for the single canonicalization GET.
    pub canonicalize_timeout: Duration,
    /// Timeout for fetching the listing page in `scrape`.
    pub page_timeout: Duration,
    /// Optional taxonomy / synonym files replacing the built-in catalog.
    pub taxonomy_path: Option<PathBuf>,
    pub synonyms_path: Option<PathBuf>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_photos: 25,
            min_photo_side_px: 300,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            canonicalize_timeout: Duration::from_secs(15),
            page_timeout: Duration::from_secs(30),
            taxonomy_path: None,
            synonyms_path: None,
        }
    }
}

impl ExtractorConfig {
    /// Defaults overridden by environment variables. Unset variables keep the
    /// default; set-but-unparseable ones are a configuration error.
    pub fn from_env() -> Result<Self, ScraperError> {
        let mut cfg = Self::default();

        if let Some(n) = env_parse::<usize>("LISTING_MAX_PHOTOS")? {
            cfg.max_photos = n;
        }
        if let Some(px) = env_parse::<i64>("LISTING_MIN_PHOTO_PX")? {
            cfg.min_photo_side_px = px;
        }
        if let Some(score) = env_parse::<f64>("AMENITY_FUZZY_THRESHOLD")? {
            if !(0.0..=100.0).contains(&score) {
                return Err(ScraperError::Config(format!(
                    "AMENITY_FUZZY_THRESHOLD must be within 0..=100, got {score}"
                )));
            }
            cfg.fuzzy_threshold = score;
        }
        if let Some(secs) = env_parse::<u64>("CANONICALIZE_TIMEOUT_SECS")? {
            cfg.canonicalize_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = env_parse::<u64>("PAGE_FETCH_TIMEOUT_SECS")? {
            cfg.page_timeout = Duration::from_secs(secs);
        }

        cfg.taxonomy_path = env_path("AMENITY_TAXONOMY_PATH");
        cfg.synonyms_path = env_path("AMENITY_SYNONYMS_PATH");

        Ok(cfg)
    }
}

fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ScraperError> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ScraperError::Config(format!("{key} has invalid value {raw:?}"))),
        Err(_) => Ok(None),
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}
