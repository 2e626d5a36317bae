// src/domain/listing.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_SOURCE: &str = "airbnb";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub full: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub name: Option<String>,
    pub superhost: Option<bool>,
    pub response_rate: Option<i64>,
    pub response_time: Option<String>,
}

/// A listing photo. `url` is the identity key used for de-duplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub caption: Option<String>,
}

/// Everything we could recover about one listing, before partner mapping.
///
/// Unknown values are `None`, never a zero or empty-string placeholder.
/// `amenities_normalized` is a sorted set derived from `amenities_raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Address,
    pub photos: Vec<Photo>,

    pub amenities_raw: Vec<String>,
    pub amenities_normalized: BTreeSet<String>,

    pub bedrooms: Option<i64>,
    pub beds: Option<i64>,
    pub bathrooms: Option<f64>,
    pub max_guests: Option<i64>,

    pub property_type_raw: Option<String>,
    pub room_type_raw: Option<String>,
    pub rating: Option<f64>,

    pub currency: Option<String>,
    pub base_price: Option<f64>,

    pub host: Host,
    pub source: String,
    pub canonical_url: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl CanonicalListing {
    /// An all-absent record stamped with the current time.
    pub fn empty(canonical_url: &str) -> Self {
        Self {
            title: None,
            description: None,
            address: Address::default(),
            photos: Vec::new(),
            amenities_raw: Vec::new(),
            amenities_normalized: BTreeSet::new(),
            bedrooms: None,
            beds: None,
            bathrooms: None,
            max_guests: None,
            property_type_raw: None,
            room_type_raw: None,
            rating: None,
            currency: None,
            base_price: None,
            host: Host::default(),
            source: DEFAULT_SOURCE.to_string(),
            canonical_url: Some(canonical_url.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            fetched_at: Utc::now(),
        }
    }
}
