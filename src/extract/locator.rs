// src/extract/locator.rs

use crate::extract::coerce::{deep_get, Object};
use serde_json::Value;
use tracing::debug;

/// Apollo cache keys for listing entities look like `Listing:12345`.
const APOLLO_ENTITY_PREFIX: &str = "listing:";

const APOLLO_CACHE_PATHS: &[&[&str]] = &[
    &["props", "pageProps", "__APOLLO_STATE__"],
    &["__APOLLO_STATE__"],
];

type Locate = fn(&Value) -> Option<&Object>;

/// Tried in order; the first non-empty object wins. Candidates are never
/// merged.
const LOCATORS: &[(&str, Locate)] = &[
    ("pageProps.listing", page_props_listing),
    ("homePDP.listingInfo.listing", home_pdp_listing),
    ("apollo cache", apollo_listing_entity),
];

/// Find the object describing the listing inside a page's embedded state.
pub fn find_listing_object(state: &Value) -> Option<&Object> {
    for (name, locate) in LOCATORS {
        if let Some(found) = locate(state) {
            debug!(candidate = *name, keys = found.len(), "located listing object");
            return Some(found);
        }
    }
    debug!("no listing object in embedded state");
    None
}

fn non_empty_object<'a>(value: Option<&'a Value>) -> Option<&'a Object> {
    value.and_then(Value::as_object).filter(|o| !o.is_empty())
}

fn page_props_listing(state: &Value) -> Option<&Object> {
    non_empty_object(deep_get(state, &["props", "pageProps", "listing"]))
}

fn home_pdp_listing(state: &Value) -> Option<&Object> {
    non_empty_object(deep_get(
        state,
        &[
            "props",
            "pageProps",
            "bootstrapData",
            "reduxData",
            "homePDP",
            "listingInfo",
            "listing",
        ],
    ))
}

fn apollo_listing_entity(state: &Value) -> Option<&Object> {
    let cache = APOLLO_CACHE_PATHS
        .iter()
        .find_map(|path| non_empty_object(deep_get(state, path)))?;

    cache.iter().find_map(|(key, value)| {
        if key.to_lowercase().starts_with(APOLLO_ENTITY_PREFIX) {
            non_empty_object(Some(value))
        } else {
            None
        }
    })
}
