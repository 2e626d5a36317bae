// src/domain/mapping.rs

use crate::amenities::AmenityNormalizer;
use crate::domain::listing::CanonicalListing;
use crate::domain::logic::{classify_property_type, classify_room_type};
use crate::domain::target::TargetListing;

/// Projects canonical listings onto the partner schema.
#[derive(Debug, Clone)]
pub struct SchemaMapper {
    amenities: AmenityNormalizer,
}

impl SchemaMapper {
    pub fn new(amenities: AmenityNormalizer) -> Self {
        Self { amenities }
    }

    pub fn map(&self, listing: &CanonicalListing) -> TargetListing {
        // Normalizing already-canonical labels is a no-op, so the union is safe.
        let amenities = self.amenities.normalize(
            listing
                .amenities_raw
                .iter()
                .chain(listing.amenities_normalized.iter()),
        );

        TargetListing {
            property_name: listing.title.clone(),
            description: listing.description.clone(),
            property_type: classify_property_type(listing.property_type_raw.as_deref()),
            room_type: classify_room_type(listing.room_type_raw.as_deref()),
            bedrooms: listing.bedrooms,
            beds: listing.beds,
            bathrooms: listing.bathrooms,
            max_guests: listing.max_guests,
            address: listing.address.clone(),
            photos: listing.photos.clone(),
            amenities,
            amenities_raw: listing.amenities_raw.clone(),
            currency: listing.currency.clone(),
            base_price: listing.base_price,
            host: listing.host.clone(),
            source: listing.source.clone(),
            canonical_url: listing.canonical_url.clone(),
            fetched_at: listing.fetched_at,
        }
    }
}
