pub mod coerce;
pub(crate) mod html_fallback;
mod listing;
pub(crate) mod locator;
pub(crate) mod photos;

use photos::PhotoRules;

use crate::amenities::AmenityNormalizer;
use crate::config::ExtractorConfig;

/// Turns embedded page state or raw markup into a `CanonicalListing`.
///
/// Holds only read-only configuration and a shared amenity catalog, so one
/// extractor can serve any number of threads.
#[derive(Debug, Clone)]
pub struct ListingExtractor {
    config: ExtractorConfig,
    amenities: AmenityNormalizer,
}

impl ListingExtractor {
    pub fn new(config: ExtractorConfig, amenities: AmenityNormalizer) -> Self {
        Self { config, amenities }
    }

    pub fn amenities(&self) -> &AmenityNormalizer {
        &self.amenities
    }

    fn photo_rules(&self) -> PhotoRules {
        PhotoRules {
            min_side_px: self.config.min_photo_side_px,
            max_items: self.config.max_photos,
        }
    }
}
