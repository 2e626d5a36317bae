// src/tests/url_tests.rs

use crate::config::ExtractorConfig;
use crate::listing_url::canonicalize::canonicalize_listing_url;
use crate::listing_url::{normalize_listing_url, resolve_listing_url};
use crate::tests::utils::StubFetcher;
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn normalize_strips_mention_marker() {
    assert_eq!(
        normalize_listing_url("@https://www.airbnb.com/rooms/123"),
        "https://www.airbnb.com/rooms/123"
    );
}

#[test]
fn normalize_adds_scheme_and_drops_trailing_paren() {
    assert_eq!(
        normalize_listing_url("airbnb.com/rooms/999)"),
        "https://airbnb.com/rooms/999"
    );
}

#[test]
fn normalize_unwraps_brackets_and_quotes() {
    assert_eq!(
        normalize_listing_url("  <https://www.airbnb.com/rooms/7>  "),
        "https://www.airbnb.com/rooms/7"
    );
    assert_eq!(
        normalize_listing_url("\"www.airbnb.com/rooms/7\"."),
        "https://www.airbnb.com/rooms/7"
    );
    assert_eq!(
        normalize_listing_url("<https://www.airbnb.com/rooms/7>."),
        "https://www.airbnb.com/rooms/7"
    );
    assert_eq!(
        normalize_listing_url("'@airbnb.com/rooms/7'"),
        "https://airbnb.com/rooms/7"
    );
}

#[test]
fn normalize_handles_protocol_relative_and_other_schemes() {
    assert_eq!(
        normalize_listing_url("//www.airbnb.com/rooms/8"),
        "https://www.airbnb.com/rooms/8"
    );
    assert_eq!(
        normalize_listing_url("http://airbnb.com/rooms/8?!"),
        "http://airbnb.com/rooms/8"
    );
}

#[test]
fn normalize_blank_input_is_empty() {
    assert_eq!(normalize_listing_url(""), "");
    assert_eq!(normalize_listing_url("   "), "");
    assert_eq!(normalize_listing_url("@"), "");
    assert_eq!(normalize_listing_url("<>"), "");
    assert_eq!(normalize_listing_url("'"), "");
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "@https://www.airbnb.com/rooms/123",
        "airbnb.com/rooms/999)",
        " <\"https://x.test/a\"> ",
        "\" airbnb.com/rooms/1 \"",
        "<@airbnb.com/rooms/2>.",
        "'''",
        "///",
        "ftp://files.test/x.",
        "@@double.test",
        "mailto:host@x.test",
        "plain words here",
    ];
    for input in inputs {
        let once = normalize_listing_url(input);
        let twice = normalize_listing_url(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
        if !once.is_empty() {
            assert!(once.contains("://"), "no scheme in {once:?}");
        }
    }
}

#[test]
fn canonicalize_prefers_redirect_target() {
    let fetcher = StubFetcher::page(
        "https://www.airbnb.com/rooms/42?source=share",
        r#"<link rel="canonical" href="https://www.airbnb.com/rooms/1">"#,
    );
    let out = canonicalize_listing_url("https://abnb.me/xyz", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/rooms/42?source=share");
    assert_eq!(fetcher.call_count(), 1);
}

#[test]
fn canonicalize_uses_canonical_link_and_qualifies_relative_href() {
    let body = r#"<html><head>
        <link rel="canonical" href="/rooms/555">
        </head><body><a href="https://www.airbnb.com/rooms/777">other</a></body></html>"#;
    let fetcher = StubFetcher::page("https://www.airbnb.com/s/Lisbon/homes", body);
    let out = canonicalize_listing_url("https://www.airbnb.com/s/Lisbon/homes", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/rooms/555");
}

#[test]
fn canonicalize_ignores_canonical_link_without_marker() {
    let body = r#"<link rel="canonical" href="https://www.airbnb.com/s/homes">
        <a href="https://www.airbnb.com/rooms/777?adults=2">first</a>
        <a href="/rooms/888">second</a>"#;
    let fetcher = StubFetcher::page("https://www.airbnb.com/s/homes", body);
    let out = canonicalize_listing_url("https://www.airbnb.com/s/homes", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/rooms/777");
}

#[test]
fn canonicalize_qualifies_first_relative_path() {
    let body = r#"<a href="/rooms/888?check_in=2024-01-01">stay</a>"#;
    let fetcher = StubFetcher::page("https://www.airbnb.com/wishlists/1", body);
    let out = canonicalize_listing_url("https://www.airbnb.com/wishlists/1", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/rooms/888");
}

#[test]
fn canonicalize_falls_back_to_final_url() {
    let fetcher = StubFetcher::page("https://www.airbnb.com/help", "<p>nothing here</p>");
    let out = canonicalize_listing_url("https://abnb.me/help", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/help");
}

#[test]
fn canonicalize_returns_input_on_failure() {
    let fetcher = StubFetcher::failing("timed out");
    let out = canonicalize_listing_url("https://abnb.me/xyz", &fetcher, TIMEOUT);
    assert_eq!(out, "https://abnb.me/xyz");
}

#[test]
fn resolve_skips_network_for_listing_urls() {
    let fetcher = StubFetcher::failing("must not be called");
    let cfg = ExtractorConfig::default();
    let out = resolve_listing_url("@www.airbnb.com/rooms/12).", &fetcher, &cfg);
    assert_eq!(out, "https://www.airbnb.com/rooms/12");
    assert_eq!(fetcher.call_count(), 0);
}

#[test]
fn resolve_canonicalizes_share_links() {
    let fetcher = StubFetcher::page("https://www.airbnb.com/rooms/31", "");
    let cfg = ExtractorConfig::default();
    let out = resolve_listing_url("<abnb.me/abc>", &fetcher, &cfg);
    assert_eq!(out, "https://www.airbnb.com/rooms/31");
    assert_eq!(fetcher.call_count(), 1);
}

#[test]
fn canonicalize_uses_final_url_even_on_error_status() {
    let fetcher = StubFetcher::with_status("https://www.airbnb.com/rooms/404", 404, "not found");
    let out = canonicalize_listing_url("https://abnb.me/gone", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/rooms/404");

    let fetcher = StubFetcher::with_status("https://www.airbnb.com/error", 503, "");
    let out = canonicalize_listing_url("https://abnb.me/busy", &fetcher, TIMEOUT);
    assert_eq!(out, "https://www.airbnb.com/error");
}
