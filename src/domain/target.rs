// src/domain/target.rs

use crate::domain::listing::{Address, Host, Photo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Bungalow,
    Condominium,
    Townhouse,
    Hotel,
    Hostel,
    Guesthouse,
    Other,
}

impl PropertyType {
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Bungalow => "Bungalow",
            PropertyType::Condominium => "Condominium",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Hotel => "Hotel",
            PropertyType::Hostel => "Hostel",
            PropertyType::Guesthouse => "Guesthouse",
            PropertyType::Other => "Other",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Entire place")]
    EntirePlace,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
    #[serde(rename = "Hotel room")]
    HotelRoom,
    Unknown,
}

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            RoomType::EntirePlace => "Entire place",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
            RoomType::HotelRoom => "Hotel room",
            RoomType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partner-schema record. Categorical fields are closed enums and every
/// amenity is a taxonomy member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetListing {
    pub property_name: Option<String>,
    pub description: Option<String>,
    pub property_type: PropertyType,
    pub room_type: RoomType,

    pub bedrooms: Option<i64>,
    pub beds: Option<i64>,
    pub bathrooms: Option<f64>,
    pub max_guests: Option<i64>,

    pub address: Address,
    pub photos: Vec<Photo>,
    pub amenities: BTreeSet<String>,
    pub amenities_raw: Vec<String>,

    pub currency: Option<String>,
    pub base_price: Option<f64>,

    pub host: Host,
    pub source: String,
    pub canonical_url: Option<String>,
    pub fetched_at: DateTime<Utc>,
}
