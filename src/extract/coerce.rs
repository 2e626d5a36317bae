// src/extract/coerce.rs
//
// Tolerant readers for untyped JSON. Every function returns `None` rather
// than failing when the value has an unexpected shape.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Walk `path` through nested objects. A missing key or a non-object step
/// yields `None`.
pub fn deep_get<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |cur, key| cur.as_object()?.get(*key))
}

/// Like `deep_get`, starting from an object and using a dotted path
/// (`"sectionedDescription.body"`).
pub fn lookup<'a>(obj: &'a Object, dotted: &str) -> Option<&'a Value> {
    let mut parts = dotted.split('.');
    let first = obj.get(parts.next()?)?;
    parts.try_fold(first, |cur, key| cur.as_object()?.get(key))
}

/// Null and blank strings count as "not there".
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// First source path whose value is present. Later sources are never
/// consulted once one hits, even if that value later fails to coerce.
pub fn first_present<'a>(obj: &'a Object, sources: &[&str]) -> Option<&'a Value> {
    sources
        .iter()
        .filter_map(|path| lookup(obj, path))
        .find(|v| is_present(v))
}

pub fn first_text(obj: &Object, sources: &[&str]) -> Option<String> {
    first_present(obj, sources).and_then(as_text)
}

pub fn first_int(obj: &Object, sources: &[&str]) -> Option<i64> {
    first_present(obj, sources).and_then(as_int)
}

pub fn first_float(obj: &Object, sources: &[&str]) -> Option<f64> {
    first_present(obj, sources).and_then(as_float)
}

pub fn first_bool(obj: &Object, sources: &[&str]) -> Option<bool> {
    first_present(obj, sources).and_then(as_bool)
}

/// First source path holding a non-empty object.
pub fn first_object<'a>(obj: &'a Object, sources: &[&str]) -> Option<&'a Object> {
    sources
        .iter()
        .filter_map(|path| lookup(obj, path))
        .filter_map(Value::as_object)
        .find(|o| !o.is_empty())
}

/// Integer: direct integer, else float truncated. Strings are parsed the
/// same way; a trailing `%` is ignored ("98%").
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            let s = s.strip_suffix('%').unwrap_or(s).trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

pub fn as_float(value: &Value) -> Option<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    f.is_finite().then_some(f)
}

/// Trimmed text; numbers are rendered, blanks are absent.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn truncate(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

