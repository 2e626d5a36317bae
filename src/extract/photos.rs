// src/extract/photos.rs

use crate::domain::listing::Photo;
use crate::extract::coerce::{as_int, first_present, first_text, lookup, Object};
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

/// Photo lists on the listing object, concatenated in this order.
pub const PHOTO_LIST_SOURCES: &[&str] = &["photos", "images", "media", "photoData.allPhotos"];

const URL_KEYS: &[&str] = &["url", "large", "xl_picture_url", "picture", "baseUrl"];
const WIDTH_KEYS: &[&str] = &["width", "w"];
const HEIGHT_KEYS: &[&str] = &["height", "h"];
const CAPTION_KEYS: &[&str] = &["caption", "title", "alt", "accessibilityLabel"];

/// Substrings of site chrome (icons, sprites) that are never listing photos.
const NON_LISTING_ASSETS: &[&str] = &[
    "airbnb-platform-assets",
    "airbnbplatformassets",
    "search-bar-icons",
];

#[derive(Debug, Clone, Copy)]
pub struct PhotoRules {
    pub min_side_px: i64,
    pub max_items: usize,
}

/// Every photo-shaped entry from all known photo lists, in source order.
/// Nothing is filtered here.
pub fn gather_photo_candidates(listing: &Object) -> Vec<Photo> {
    PHOTO_LIST_SOURCES
        .iter()
        .filter_map(|path| lookup(listing, path))
        .filter_map(Value::as_array)
        .flatten()
        .filter_map(photo_from_value)
        .collect()
}

/// Read one photo entry: either a bare URL string or an object.
pub fn photo_from_value(value: &Value) -> Option<Photo> {
    match value {
        Value::String(url) => Some(Photo {
            url: url.trim().to_string(),
            width: None,
            height: None,
            caption: None,
        }),
        Value::Object(obj) => Some(Photo {
            url: first_text(obj, URL_KEYS)?,
            width: first_present(obj, WIDTH_KEYS).and_then(as_int).and_then(dimension),
            height: first_present(obj, HEIGHT_KEYS).and_then(as_int).and_then(dimension),
            caption: first_text(obj, CAPTION_KEYS),
        }),
        _ => None,
    }
}

/// Drop unusable photos, de-duplicate by URL keeping the first entry's
/// metadata, and cap the list.
pub fn dedupe_photos<I>(candidates: I, rules: PhotoRules) -> Vec<Photo>
where
    I: IntoIterator<Item = Photo>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    let mut considered = 0usize;

    for photo in candidates {
        if out.len() >= rules.max_items {
            break;
        }
        considered += 1;

        if !is_listing_photo_url(&photo.url) {
            continue;
        }
        if let (Some(w), Some(h)) = (photo.width, photo.height) {
            if w.min(h) < rules.min_side_px {
                continue;
            }
        }
        if !seen.insert(photo.url.clone()) {
            continue;
        }
        out.push(photo);
    }

    debug!(considered, kept = out.len(), "photo filter");
    out
}

/// Zero or negative sizes mean "unknown", not "tiny".
pub fn dimension(px: i64) -> Option<i64> {
    (px > 0).then_some(px)
}

fn is_listing_photo_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }
    let lowered = url.to_lowercase();
    if lowered.starts_with("data:") {
        return false;
    }
    !NON_LISTING_ASSETS.iter().any(|marker| lowered.contains(marker))
}
