//! Margin, padding, sizing, and inset classes, including the axis shorthands
//! that expand to multiple physical properties.

use super::{negate, scale_value};
use crate::types::{Mapping, PropertyMapping};

/// Axis shorthands expand to one mapping per physical side, all sharing the
/// resolved value. Longer prefixes are listed before their generalizations
/// (`inset-x-` before `inset-`).
const AXES: &[(&str, &[&str])] = &[
    ("mx-", &["margin-left", "margin-right"]),
    ("my-", &["margin-top", "margin-bottom"]),
    ("px-", &["padding-left", "padding-right"]),
    ("py-", &["padding-top", "padding-bottom"]),
    ("inset-x-", &["left", "right"]),
    ("inset-y-", &["top", "bottom"]),
    ("inset-", &["top", "right", "bottom", "left"]),
];

/// Single-property families. Two-letter prefixes precede their one-letter
/// generalizations so `mt-` is not swallowed by `m-`.
const SINGLE: &[(&str, &str)] = &[
    ("mt-", "margin-top"),
    ("mr-", "margin-right"),
    ("mb-", "margin-bottom"),
    ("ml-", "margin-left"),
    ("m-", "margin"),
    ("pt-", "padding-top"),
    ("pr-", "padding-right"),
    ("pb-", "padding-bottom"),
    ("pl-", "padding-left"),
    ("p-", "padding"),
    ("top-", "top"),
    ("right-", "right"),
    ("bottom-", "bottom"),
    ("left-", "left"),
    ("min-w-", "min-width"),
    ("min-h-", "min-height"),
    ("max-w-", "max-width"),
    ("max-h-", "max-height"),
    ("w-", "width"),
    ("h-", "height"),
];

pub fn map(class: &str) -> Option<Mapping> {
    let (negated, body) = match class.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, class),
    };

    for (prefix, properties) in AXES {
        if let Some(key) = body.strip_prefix(prefix) {
            let value = resolve(key, properties[0], negated)?;
            let mappings = properties
                .iter()
                .map(|p| PropertyMapping::new(*p, value.clone()))
                .collect();
            return Some(Mapping::Multi(mappings));
        }
    }

    for (prefix, property) in SINGLE {
        if let Some(key) = body.strip_prefix(prefix) {
            let value = resolve(key, property, negated)?;
            return Some(Mapping::single(*property, value));
        }
    }

    None
}

fn resolve(key: &str, property: &str, negated: bool) -> Option<String> {
    // viewport keyword only exists for the sizing family
    let value = if key == "screen" {
        match property {
            "height" | "min-height" | "max-height" => "100vh".to_string(),
            "width" | "min-width" | "max-width" => "100vw".to_string(),
            _ => return None,
        }
    } else {
        scale_value(key)?
    };
    Some(if negated { negate(&value) } else { value })
}
