// src/extract/html_fallback.rs

use crate::domain::listing::{CanonicalListing, Photo};
use crate::extract::photos::{dedupe_photos, dimension};
use crate::extract::ListingExtractor;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

const EMBEDDED_STATE_SELECTOR: &str = r#"script[id="__NEXT_DATA__"]"#;

const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;
const AMENITY_SELECTOR: &str = r#"[data-testid*="amenity"], .amenity, .amenities li"#;

/// The page's embedded state, if the state script is present and holds
/// valid JSON.
pub fn embedded_state(document: &Html) -> Option<Value> {
    let selector = parse_selector(EMBEDDED_STATE_SELECTOR)?;
    let element = document.select(&selector).next()?;
    let json_text: String = element.text().collect();

    match serde_json::from_str(json_text.trim()) {
        Ok(data) => Some(data),
        Err(e) => {
            debug!(error = %e, "embedded state script is not valid JSON");
            None
        }
    }
}

impl ListingExtractor {
    /// Build a listing from raw markup.
    ///
    /// Pages carrying embedded state go through `from_state`; anything else
    /// is read from the visible document (title, meta description, images,
    /// amenity-looking elements).
    pub fn from_html(&self, html: &str, url: &str) -> CanonicalListing {
        let document = Html::parse_document(html);

        if let Some(state) = embedded_state(&document) {
            debug!("using embedded state from markup");
            return self.from_state(&state, url);
        }

        debug!("no embedded state, falling back to markup");
        let mut out = CanonicalListing::empty(url);

        out.title = first_element(&document, "title")
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .filter(|s| !s.is_empty());

        out.description = first_element(&document, DESCRIPTION_SELECTOR)
            .and_then(|el| el.value().attr("content"))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        out.photos = dedupe_photos(image_candidates(&document), self.photo_rules());

        out.amenities_raw = amenity_texts(&document);
        out.amenities_normalized = self.amenities().normalize(&out.amenities_raw);

        out
    }
}

fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(selector = css, error = %e, "invalid selector");
            None
        }
    }
}

fn first_element<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(css)?;
    document.select(&selector).next()
}

fn image_candidates(document: &Html) -> Vec<Photo> {
    let Some(selector) = parse_selector("img") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|img| {
            let el = img.value();
            let src = el
                .attr("src")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .or_else(|| el.attr("data-src").map(str::trim))?;

            Some(Photo {
                url: src.to_string(),
                width: el
                    .attr("width")
                    .and_then(|w| w.trim().parse().ok())
                    .and_then(dimension),
                height: el
                    .attr("height")
                    .and_then(|h| h.trim().parse().ok())
                    .and_then(dimension),
                caption: el
                    .attr("alt")
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            })
        })
        .collect()
}

fn amenity_texts(document: &Html) -> Vec<String> {
    let Some(selector) = parse_selector(AMENITY_SELECTOR) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|el| collapse_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .filter(|s| !s.is_empty())
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
