//! Class-to-property mappers and the mapper dispatcher.
//!
//! Each submodule covers one CSS domain and maps a single class token to its
//! canonical property/value pair(s), trying an exact static lookup first and
//! dynamic prefix parsing second. The dispatcher runs the domain mappers in a
//! fixed order and returns the first hit.

pub mod display;
pub mod effects;
pub mod flexbox;
pub mod grid;
pub mod spacing;
pub mod typography;
pub mod utilities;


use crate::tables;
use crate::types::Mapping;

/// Resolve a class token to its CSS property mapping(s).
///
/// Mappers run in a fixed order: display, flexbox, spacing, typography,
/// effects, utilities, grid. The recognized patterns are disjoint in
/// practice, but the order is part of the contract and must be preserved
/// when new productions are added.
///
/// Returns `None` for tokens no domain recognizes. Never panics; malformed
/// numeric suffixes simply fail to map.
pub fn class_property(class: &str) -> Option<Mapping> {
    let class = class.trim();
    if class.is_empty() {
        return None;
    }
    display::map(class)
        .or_else(|| flexbox::map(class))
        .or_else(|| spacing::map(class))
        .or_else(|| typography::map(class))
        .or_else(|| effects::map(class))
        .or_else(|| utilities::map(class))
        .or_else(|| grid::map(class))
}

/// Split a class string into tokens on runs of whitespace.
///
/// Order-preserving, empty tokens discarded, no deduplication.
pub fn split_classes(classes: &str) -> Vec<&str> {
    classes.split_whitespace().collect()
}

/// True when the token is a plain (possibly fractional) decimal number.
pub(crate) fn is_numeric(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.parse::<f64>().is_ok()
}

/// True when the token is an unsigned integer.
pub(crate) fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Resolve a spacing scale key, letting bare numerals pass through as
/// literal values. Non-numeric keys outside the scale do not map.
pub(crate) fn scale_value(key: &str) -> Option<String> {
    if let Some(value) = tables::spacing(key) {
        return Some(value.to_string());
    }
    is_numeric(key).then(|| key.to_string())
}

/// Invert the sign of a resolved length. `auto` and zero are left alone.
pub(crate) fn negate(value: &str) -> String {
    if value == "auto" || value == "0" {
        value.to_string()
    } else if let Some(stripped) = value.strip_prefix('-') {
        stripped.to_string()
    } else {
        format!("-{value}")
    }
}

/// Exact lookup in a static `(key, value)` table.
pub(crate) fn table_lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
