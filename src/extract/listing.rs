// src/extract/listing.rs

use crate::domain::listing::{Address, CanonicalListing, Host};
use crate::extract::coerce::{
    first_bool, first_float, first_int, first_object, first_present, first_text, lookup,
    Object,
};
use crate::extract::locator::find_listing_object;
use crate::extract::photos::{dedupe_photos, gather_photo_candidates};
use crate::extract::ListingExtractor;
use serde_json::Value;
use tracing::debug;

// Known spellings of each field across page versions, most recent first.
const TITLE: &[&str] = &["name", "title", "seoDetails.listingName"];
const DESCRIPTION: &[&str] = &[
    "description",
    "sectionedDescription.body",
    "sectionedDescription.overview",
    "seoDetails.description",
];
const ADDRESS: &[&str] = &["address", "location"];
const BEDROOMS: &[&str] = &["bedrooms"];
const BEDS: &[&str] = &["beds"];
const BATHROOMS: &[&str] = &["bathrooms"];
const MAX_GUESTS: &[&str] = &["maxGuests", "personCapacity"];
const PROPERTY_TYPE: &[&str] = &["propertyType", "propertyTypeLabel", "property_type"];
const ROOM_TYPE: &[&str] = &["roomTypeCategory", "roomType", "room_type"];
const RATING: &[&str] = &["starRating", "avgRating", "overallRating"];
const AMENITIES: &[&str] = &["amenities", "amenityNames", "structuredContent.amenities"];
const PRICE_QUOTE: &[&str] = &["pricingQuote", "price"];
const PRICE_DETAIL: &[&str] = &["price", "rate"];
const CURRENCY: &[&str] = &["currency", "currencyCode"];
const AMOUNT: &[&str] = &["amount", "total", "nightly"];
const HOST: &[&str] = &["host"];

const LISTING_LAT: &[&str] = &["lat", "latitude"];
const LISTING_LNG: &[&str] = &["lng", "longitude"];

impl ListingExtractor {
    /// Build a listing from a page's embedded state (`__NEXT_DATA__` and
    /// friends). Any JSON is accepted; whatever cannot be found is `None`.
    pub fn from_state(&self, state: &Value, url: &str) -> CanonicalListing {
        let mut out = CanonicalListing::empty(url);
        let Some(listing) = find_listing_object(state) else {
            return out;
        };

        out.title = first_text(listing, TITLE);
        out.description = first_text(listing, DESCRIPTION);
        out.address = read_address(listing);

        out.photos = dedupe_photos(gather_photo_candidates(listing), self.photo_rules());

        out.amenities_raw = read_amenity_labels(listing);
        out.amenities_normalized = self.amenities().normalize(&out.amenities_raw);

        out.bedrooms = first_int(listing, BEDROOMS);
        out.beds = first_int(listing, BEDS);
        out.bathrooms = first_float(listing, BATHROOMS);
        out.max_guests = first_int(listing, MAX_GUESTS);

        out.property_type_raw = first_text(listing, PROPERTY_TYPE);
        out.room_type_raw = first_text(listing, ROOM_TYPE);
        out.rating = first_float(listing, RATING);

        let (currency, base_price) = read_price(listing);
        out.currency = currency;
        out.base_price = base_price;

        out.host = read_host(listing);

        debug!(
            title = out.title.as_deref().unwrap_or("-"),
            photos = out.photos.len(),
            amenities = out.amenities_normalized.len(),
            "extracted listing from embedded state"
        );
        out
    }
}

fn read_address(listing: &Object) -> Address {
    let mut address = Address::default();

    match first_present(listing, ADDRESS) {
        Some(Value::Object(raw)) => {
            address.full = first_text(raw, &["full", "public"]);
            address.street = first_text(raw, &["street", "streetAddress"]);
            address.city = first_text(raw, &["city"]);
            address.state = first_text(raw, &["state", "stateProvince"]);
            address.postal_code = first_text(raw, &["postalCode", "zipcode"]);
            address.country = first_text(raw, &["country"]);
            address.lat = first_float(raw, LISTING_LAT);
            address.lng = first_float(raw, LISTING_LNG);
        }
        // Some page versions only carry a display string.
        Some(Value::String(s)) => address.full = Some(s.trim().to_string()),
        _ => {}
    }

    // Coordinates often sit on the listing itself.
    if address.lat.is_none() {
        address.lat = first_float(listing, LISTING_LAT);
    }
    if address.lng.is_none() {
        address.lng = first_float(listing, LISTING_LNG);
    }
    address
}

/// First non-empty amenity list. Entries are plain labels or objects with a
/// `name`/`title`; objects flagged `"available": false` are skipped.
fn read_amenity_labels(listing: &Object) -> Vec<String> {
    AMENITIES
        .iter()
        .filter_map(|path| lookup(listing, path))
        .filter_map(Value::as_array)
        .map(|items| items.iter().filter_map(amenity_label).collect::<Vec<_>>())
        .find(|labels| !labels.is_empty())
        .unwrap_or_default()
}

fn amenity_label(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Value::Object(obj) => {
            if first_bool(obj, &["available"]) == Some(false) {
                return None;
            }
            first_text(obj, &["name", "title"])
        }
        _ => None,
    }
}

fn read_price(listing: &Object) -> (Option<String>, Option<f64>) {
    let Some(quote) = first_object(listing, PRICE_QUOTE) else {
        return (None, None);
    };
    let price = first_object(quote, PRICE_DETAIL).unwrap_or(quote);

    (first_text(price, CURRENCY), first_float(price, AMOUNT))
}

fn read_host(listing: &Object) -> Host {
    let Some(raw) = first_object(listing, HOST) else {
        return Host::default();
    };

    Host {
        name: first_text(raw, &["name", "hostName"]),
        superhost: first_bool(raw, &["isSuperhost", "is_superhost"]),
        response_rate: first_int(raw, &["responseRate"]),
        response_time: first_text(raw, &["responseTime"]),
    }
}
