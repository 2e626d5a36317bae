// src/domain/logic.rs

use crate::domain::target::{PropertyType, RoomType};

/// Known room-type spellings, both `snake_case` and spaced.
const ROOM_TYPES: &[(&str, RoomType)] = &[
    ("entire_place", RoomType::EntirePlace),
    ("entire place", RoomType::EntirePlace),
    ("entire_home", RoomType::EntirePlace),
    ("entire home", RoomType::EntirePlace),
    ("entire home/apt", RoomType::EntirePlace),
    ("private_room", RoomType::PrivateRoom),
    ("private room", RoomType::PrivateRoom),
    ("shared_room", RoomType::SharedRoom),
    ("shared room", RoomType::SharedRoom),
    ("hotel_room", RoomType::HotelRoom),
    ("hotel room", RoomType::HotelRoom),
];

/// Keyword groups checked in order; the first group with any substring hit
/// wins. Groups whose keywords contain another group's keyword must come
/// first ("townhouse" and "guesthouse" both contain "house").
const PROPERTY_TYPE_RULES: &[(PropertyType, &[&str])] = &[
    (PropertyType::Townhouse, &["townhouse", "townhome", "town house"]),
    (PropertyType::Guesthouse, &["guesthouse", "guest house"]),
    (PropertyType::Apartment, &["apartment", "apt", "flat"]),
    (PropertyType::Condominium, &["condominium", "condo"]),
    (PropertyType::Villa, &["villa"]),
    (PropertyType::Bungalow, &["bungalow"]),
    (PropertyType::Hostel, &["hostel"]),
    (PropertyType::Hotel, &["hotel"]),
    (PropertyType::House, &["house", "home"]),
];

/// Exact, case-insensitive lookup. Anything unrecognized is `Unknown`.
pub fn classify_room_type(raw: Option<&str>) -> RoomType {
    let Some(raw) = raw else {
        return RoomType::Unknown;
    };
    let key = raw.trim().to_lowercase();

    ROOM_TYPES
        .iter()
        .find(|(spelling, _)| *spelling == key)
        .map(|(_, room_type)| *room_type)
        .unwrap_or(RoomType::Unknown)
}

/// Keyword classification into the partner's property types. Unmatched or
/// missing input falls into `Other`.
pub fn classify_property_type(raw: Option<&str>) -> PropertyType {
    let key = match raw {
        Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
        _ => return PropertyType::Other,
    };

    PROPERTY_TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| key.contains(k)))
        .map(|(property_type, _)| *property_type)
        .unwrap_or(PropertyType::Other)
}
