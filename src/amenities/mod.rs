mod catalog;
pub(crate) mod fuzzy;
mod normalizer;

pub use catalog::AmenityCatalog;
pub use normalizer::{AmenityNormalizer, DEFAULT_FUZZY_THRESHOLD};

use unicode_normalization::UnicodeNormalization;

/// Lookup form of an amenity label: NFKC-composed, lower-cased, control
/// characters and whitespace runs collapsed to one space, trimmed.
pub fn normalize_text(text: &str) -> String {
    let composed: String = text.nfkc().collect::<String>().to_lowercase();
    let mut out = String::with_capacity(composed.len());
    let mut prev_space = false;
    for c in composed.chars() {
        if c.is_whitespace() || c.is_control() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
