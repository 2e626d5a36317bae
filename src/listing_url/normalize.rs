// src/listing_url/normalize.rs

use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_SCHEME: &str = "https://";
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\''];
const WRAPPERS: &[(char, char)] = &[('<', '>'), ('"', '"'), ('\'', '\'')];

fn scheme_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid scheme regex"))
}

/// Clean up a pasted listing URL.
///
/// Trims whitespace, drops a leading `@`, unwraps one `<...>`, `"..."` or
/// `'...'` pair (or a dangling opener) and strips trailing punctuation,
/// repeating until nothing changes, then adds `https://` when there is no
/// scheme. Never fails and is idempotent; blank input gives `""`.
pub fn normalize_listing_url(raw: &str) -> String {
    let mut s = raw;
    loop {
        let before = s;
        s = s.trim();
        s = s.strip_prefix('@').unwrap_or(s);
        s = strip_wrapping_pair(s);
        s = s.trim_end_matches(TRAILING_PUNCTUATION);
        if s == before {
            break;
        }
    }

    if s.is_empty() {
        return String::new();
    }
    if scheme_re().is_match(s) {
        return s.to_string();
    }
    if let Some(rest) = s.strip_prefix("//") {
        return format!("{DEFAULT_SCHEME}{rest}");
    }
    format!("{DEFAULT_SCHEME}{s}")
}

/// Remove one matching `open..close` pair. An opener whose closer is
/// missing (usually eaten along with trailing punctuation, as in `<url>.`)
/// is dropped on its own.
fn strip_wrapping_pair(s: &str) -> &str {
    for (open, close) in WRAPPERS {
        let Some(inner) = s.strip_prefix(*open) else {
            continue;
        };
        return inner.strip_suffix(*close).unwrap_or(inner);
    }
    s
}
