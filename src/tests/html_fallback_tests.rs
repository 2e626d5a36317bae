// src/tests/html_fallback_tests.rs

use crate::extract::html_fallback::embedded_state;
use scraper::Html;
use crate::tests::utils::{default_extractor, MARKUP_ONLY_HTML, SAMPLE_LISTING_HTML};

const URL: &str = "https://www.airbnb.com/rooms/42";

#[test]
fn embedded_state_is_preferred_over_markup() {
    let listing = default_extractor().from_html(SAMPLE_LISTING_HTML, URL);

    assert_eq!(listing.title.as_deref(), Some("Charming loft in city center"));
    assert_eq!(listing.address.city.as_deref(), Some("Lisbon"));
    assert_eq!(listing.address.country.as_deref(), Some("Portugal"));
    assert_eq!(listing.currency.as_deref(), Some("EUR"));
    assert_eq!(listing.base_price, Some(95.0));
    assert_eq!(listing.amenities_raw, vec!["Wi-Fi", "Washing machine"]);
    assert_eq!(
        listing.amenities_normalized.iter().collect::<Vec<_>>(),
        vec!["Washer", "Wifi"]
    );
    assert_eq!(listing.canonical_url.as_deref(), Some(URL));
}

#[test]
fn markup_only_page() {
    let listing = default_extractor().from_html(MARKUP_ONLY_HTML, URL);

    assert_eq!(listing.title.as_deref(), Some("Cosy cabin by the lake"));
    assert_eq!(
        listing.description.as_deref(),
        Some("Wood stove, lake view and a sauna.")
    );

    let urls: Vec<&str> = listing.photos.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://a0.muscache.com/im/pictures/cabin-1.jpg",
            "https://a0.muscache.com/im/pictures/cabin-2.jpg",
        ]
    );
    assert_eq!(listing.photos[0].caption.as_deref(), Some("Front porch"));

    assert_eq!(
        listing.amenities_raw,
        vec!["Wireless Internet", "Free parking", "Jacuzzi", "Dog sitter on call"]
    );
    assert_eq!(
        listing.amenities_normalized.iter().collect::<Vec<_>>(),
        vec!["Free parking on premises", "Hot tub", "Wifi"]
    );

    assert!(listing.bedrooms.is_none());
    assert!(listing.base_price.is_none());
    assert_eq!(listing.source, "airbnb");
}

#[test]
fn broken_state_script_falls_back_to_markup() {
    let html = r#"<html><head><title>Plain page</title>
        <script id="__NEXT_DATA__">{"props": {"pageProps": </script></head>
        <body><li class="amenity">Hair dryer</li></body></html>"#;

    let listing = default_extractor().from_html(html, URL);
    assert_eq!(listing.title.as_deref(), Some("Plain page"));
    assert_eq!(listing.amenities_raw, vec!["Hair dryer"]);
    assert!(listing.amenities_normalized.contains("Hair dryer"));
}

#[test]
fn state_without_listing_stays_sparse() {
    let html = r#"<title>Search results</title>
        <script id="__NEXT_DATA__">{"props": {"pageProps": {"searchResults": []}}}</script>"#;

    let listing = default_extractor().from_html(html, URL);
    // state parsed, so markup is not consulted
    assert!(listing.title.is_none());
    assert!(listing.photos.is_empty());
}

#[test]
fn garbage_never_panics() {
    let extractor = default_extractor();
    for html in [
        "",
        "   ",
        "not html at all {",
        "<<<>>><img src=><img src=\"\"></img></img>",
        "<script id=\"__NEXT_DATA__\"></script>",
        "<script id=\"__NEXT_DATA__\">null</script>",
        "<title></title><meta name=\"description\">",
    ] {
        let listing = extractor.from_html(html, "");
        assert!(listing.title.is_none(), "title from {html:?}");
        assert!(listing.photos.is_empty(), "photos from {html:?}");
        assert!(listing.canonical_url.is_none());
    }
}

#[test]
fn embedded_state_reads_only_valid_json() {
    let parse = |html: &str| embedded_state(&Html::parse_document(html));

    let state = parse(SAMPLE_LISTING_HTML).unwrap();
    assert_eq!(
        state["props"]["pageProps"]["listing"]["title"],
        "Charming loft in city center"
    );

    assert!(parse(MARKUP_ONLY_HTML).is_none());
    assert!(parse("<script id=\"__NEXT_DATA__\">{oops</script>").is_none());
    assert!(parse("<script id=\"other\">{}</script>").is_none());
}

#[test]
fn zero_sized_images_are_kept() {
    let html = r#"<title>Cabin</title>
        <img src="https://img.test/lazy.jpg" width="0" height="0">
        <img src="https://img.test/icon.png" width="16" height="16">"#;

    let listing = default_extractor().from_html(html, URL);
    assert_eq!(listing.photos.len(), 1);
    assert_eq!(listing.photos[0].url, "https://img.test/lazy.jpg");
    assert_eq!(listing.photos[0].width, None);
}
