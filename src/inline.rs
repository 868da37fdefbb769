//! Inline-style declaration helpers.
//!
//! The sibling validation path for `style="..."` attributes: trivial
//! delimiter splitting into property/value pairs, plus the string-content
//! checks (GIF URLs, legacy units) the class path never needs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules;
use crate::types::{PropertyMapping, REASON_INVALID_CLASS, Verdict};

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"url\(\s*['"]?([^'")]+?)['"]?\s*\)"#).expect("static pattern"));

static GIF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\.gif(?:[?#'\x22)]|$)").expect("static pattern"));

static LEGACY_UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?(?:pt|pc|in|cm|mm|%)$").expect("static pattern"));

/// Properties whose values are lengths and therefore subject to the legacy
/// unit check.
const SIZE_PROPERTIES: &[&str] = &[
    "width",
    "height",
    "min-width",
    "min-height",
    "max-width",
    "max-height",
    "font-size",
    "line-height",
    "letter-spacing",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "top",
    "right",
    "bottom",
    "left",
    "border-width",
    "border-radius",
];

/// Split an inline style string into property/value pairs.
///
/// Declarations missing a colon or with an empty side are skipped.
pub fn parse_declarations(style: &str) -> Vec<PropertyMapping> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            (!property.is_empty() && !value.is_empty())
                .then(|| PropertyMapping::new(property, value))
        })
        .collect()
}

/// True when the text references a GIF resource.
pub fn detect_gif(text: &str) -> bool {
    GIF_RE.is_match(text)
}

/// True when a single value token uses a legacy absolute unit or percentage.
pub fn detect_unsupported_unit(value: &str) -> bool {
    value
        .split_whitespace()
        .any(|token| LEGACY_UNIT_RE.is_match(token))
}

/// Extract the first `url(...)` argument, unquoted.
pub fn extract_url(value: &str) -> Option<&str> {
    URL_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Validate one inline declaration against the property rule table plus the
/// string-content checks.
pub fn declaration_support(property: &str, value: &str) -> Verdict {
    let property = property.trim();
    let value = value.trim();
    if property.is_empty() || value.is_empty() {
        return Verdict::fail(REASON_INVALID_CLASS);
    }

    if extract_url(value).is_some() && detect_gif(value) {
        return Verdict::fail(rules::reason::GIF_URL);
    }
    if SIZE_PROPERTIES.contains(&property) && detect_unsupported_unit(value) {
        return Verdict::fail(rules::reason::LEGACY_UNIT);
    }
    if let Some(v) = rules::match_property(property, value) {
        return v;
    }

    Verdict::ok()
}
