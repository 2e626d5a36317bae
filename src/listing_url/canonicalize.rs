// src/listing_url/canonicalize.rs

use crate::config::ExtractorConfig;
use crate::fetcher::HttpFetch;
use crate::listing_url::normalize::normalize_listing_url;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Path fragment that identifies a single-listing detail page.
pub const LISTING_PATH_MARKER: &str = "/rooms/";
pub const SITE_ORIGIN: &str = "https://www.airbnb.com";

fn absolute_listing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"https?://[^"'\s<>]+/rooms/\d+"#).expect("valid absolute listing regex")
    })
}

fn relative_listing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/rooms/\d+").expect("valid relative listing regex"))
}

pub fn is_listing_url(url: &str) -> bool {
    url.to_lowercase().contains(LISTING_PATH_MARKER)
}

/// Follow a share / search / short link to the listing detail URL.
///
/// Makes one GET. Resolution order: the redirected URL itself, the page's
/// canonical link, the first absolute listing URL in the body, the first
/// relative listing path in the body, and finally the redirected URL.
/// Any fetch failure returns `url` unchanged.
pub fn canonicalize_listing_url(url: &str, fetcher: &dyn HttpFetch, timeout: Duration) -> String {
    let page = match fetcher.get(url, timeout) {
        Ok(page) => page,
        Err(e) => {
            warn!(url, error = %e, "canonicalization fetch failed, keeping original url");
            return url.to_string();
        }
    };

    if !page.is_success() {
        debug!(url = %page.final_url, status = page.status, "redirect chain ended on an error status");
    }

    if is_listing_url(&page.final_url) {
        debug!(url = %page.final_url, "redirect landed on listing page");
        return page.final_url;
    }

    if let Some(href) = canonical_link(&page.body) {
        debug!(url = %href, "using canonical link");
        return href;
    }

    if let Some(m) = absolute_listing_re().find(&page.body) {
        debug!(url = m.as_str(), "using first absolute listing url in body");
        return m.as_str().to_string();
    }

    if let Some(m) = relative_listing_re().find(&page.body) {
        if let Some(joined) = qualify(m.as_str()) {
            debug!(url = %joined, "using first relative listing path in body");
            return joined;
        }
    }

    debug!(url = %page.final_url, "no listing link found, using final url");
    page.final_url
}

/// Normalize a pasted URL and, unless it already points at a listing,
/// resolve it through the network.
pub fn resolve_listing_url(raw: &str, fetcher: &dyn HttpFetch, cfg: &ExtractorConfig) -> String {
    let url = normalize_listing_url(raw);
    if url.is_empty() || is_listing_url(&url) {
        return url;
    }
    canonicalize_listing_url(&url, fetcher, cfg.canonicalize_timeout)
}

fn canonical_link(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(r#"link[rel="canonical"]"#).ok()?;

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .filter(|href| is_listing_url(href))
        .find_map(qualify)
}

/// Absolute URLs pass through; relative paths are joined onto the site origin.
fn qualify(href: &str) -> Option<String> {
    if let Ok(abs) = Url::parse(href) {
        return Some(abs.to_string());
    }
    Url::parse(SITE_ORIGIN)
        .and_then(|origin| origin.join(href))
        .map(|u| u.to_string())
        .ok()
}
