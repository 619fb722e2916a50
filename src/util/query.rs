//! Raw query-string pair handling.
//!
//! Links derived from the current URL (sort toggles, search updates) must
//! leave every unrelated parameter byte-for-byte intact, so these helpers
//! never percent-decode. Pairs are kept in document order and `set_raw`
//! replaces a key's first occurrence in place, matching `URLSearchParams.set`
//! semantics.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be escaped inside a query-string value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Parse a query string into still-encoded key/value pairs.
///
/// Accepts the string with or without a leading `?`. Pairs without a `=`
/// parse as a key with an empty value.
pub fn parse_raw(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (k.to_owned(), v.to_owned()),
            None => (part.to_owned(), String::new()),
        })
        .collect()
}

/// Rebuild a query string (no leading `?`) from raw pairs.
pub fn build_raw(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Set `key` to an already-encoded `value`, replacing the first occurrence
/// in place (and dropping any duplicates), or appending if absent.
pub fn set_raw(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let mut found = false;
    pairs.retain_mut(|(k, v)| {
        if k == key {
            if found {
                return false;
            }
            found = true;
            *v = value.to_owned();
        }
        true
    });
    if !found {
        pairs.push((key.to_owned(), value.to_owned()));
    }
}

/// Remove every occurrence of `key`.
pub fn remove_raw(pairs: &mut Vec<(String, String)>, key: &str) {
    pairs.retain(|(k, _)| k != key);
}

/// Percent-encode a value for inclusion in a query string.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Build a link to `pathname` with `key` set to `value` (encoded), or
/// removed entirely when `value` is empty. Every other parameter passes
/// through untouched.
pub fn with_param(pathname: &str, search: &str, key: &str, value: &str) -> String {
    let mut pairs = parse_raw(search);
    if value.is_empty() {
        remove_raw(&mut pairs, key);
    } else {
        set_raw(&mut pairs, key, &encode_value(value));
    }
    if pairs.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{}", build_raw(&pairs))
    }
}
