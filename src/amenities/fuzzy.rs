// src/amenities/fuzzy.rs

use rapidfuzz::distance::indel;
use std::collections::BTreeSet;

/// Token-set similarity on a 0-100 scale.
///
/// Both strings are split on whitespace into word sets. If one set is a
/// subset of the other (and they share a word) the score is 100; otherwise
/// it is the best indel similarity between the sorted shared words and the
/// shared words extended by each side's leftovers.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let sect = intersection.join(" ");
    let diff_ab = diff_ab.join(" ");
    let diff_ba = diff_ba.join(" ");

    let sect_len = sect.chars().count();
    let ab_len = diff_ab.chars().count();
    let ba_len = diff_ba.chars().count();
    let joiner = usize::from(sect_len > 0);

    let sect_ab_len = sect_len + joiner + ab_len;
    let sect_ba_len = sect_len + joiner + ba_len;

    // The shared words are a common prefix, so only the leftovers differ.
    let diff_only = scaled(
        indel::distance(diff_ab.chars(), diff_ba.chars()),
        sect_ab_len + sect_ba_len,
    );
    if sect_len == 0 {
        return diff_only;
    }

    let sect_ab = scaled(joiner + ab_len, sect_len + sect_ab_len);
    let sect_ba = scaled(joiner + ba_len, sect_len + sect_ba_len);
    diff_only.max(sect_ab).max(sect_ba)
}

/// Plain indel similarity of the whole strings, 0-100.
pub fn ratio(a: &str, b: &str) -> f64 {
    100.0 * indel::normalized_similarity(a.chars(), b.chars())
}

fn scaled(distance: usize, total_len: usize) -> f64 {
    if total_len == 0 {
        return 100.0;
    }
    100.0 * (1.0 - distance as f64 / total_len as f64)
}
