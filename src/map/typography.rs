//! Typography classes: font family/size/weight, text alignment and color,
//! decoration, transforms, line height, letter spacing, and whitespace.

use super::{scale_value, table_lookup};
use crate::tables;
use crate::types::{Mapping, PropertyMapping};

const FAMILIES: &[(&str, &str)] = &[
    ("sans", "ui-sans-serif, system-ui, sans-serif"),
    ("serif", "ui-serif, Georgia, serif"),
    ("mono", "ui-monospace, SFMono-Regular, monospace"),
];

const LEADING: &[(&str, &str)] = &[
    ("none", "1"),
    ("tight", "1.25"),
    ("snug", "1.375"),
    ("normal", "1.5"),
    ("relaxed", "1.625"),
    ("loose", "2"),
];

const TRACKING: &[(&str, &str)] = &[
    ("tighter", "-0.05em"),
    ("tight", "-0.025em"),
    ("normal", "0em"),
    ("wide", "0.025em"),
    ("wider", "0.05em"),
    ("widest", "0.1em"),
];

const WHITESPACE: &[&str] = &["normal", "nowrap", "pre", "pre-line", "pre-wrap"];

pub fn map(class: &str) -> Option<Mapping> {
    match class {
        "italic" => return Some(Mapping::single("font-style", "italic")),
        "not-italic" => return Some(Mapping::single("font-style", "normal")),
        "underline" => return Some(Mapping::single("text-decoration", "underline")),
        "line-through" => return Some(Mapping::single("text-decoration", "line-through")),
        "no-underline" => return Some(Mapping::single("text-decoration", "none")),
        "uppercase" => return Some(Mapping::single("text-transform", "uppercase")),
        "lowercase" => return Some(Mapping::single("text-transform", "lowercase")),
        "capitalize" => return Some(Mapping::single("text-transform", "capitalize")),
        "normal-case" => return Some(Mapping::single("text-transform", "none")),
        "truncate" => {
            return Some(Mapping::Multi(vec![
                PropertyMapping::new("overflow", "hidden"),
                PropertyMapping::new("text-overflow", "ellipsis"),
                PropertyMapping::new("white-space", "nowrap"),
            ]));
        }
        "break-normal" => {
            return Some(Mapping::Multi(vec![
                PropertyMapping::new("overflow-wrap", "normal"),
                PropertyMapping::new("word-break", "normal"),
            ]));
        }
        "break-words" => return Some(Mapping::single("overflow-wrap", "break-word")),
        "break-all" => return Some(Mapping::single("word-break", "break-all")),
        _ => {}
    }

    if let Some(rest) = class.strip_prefix("font-") {
        if let Some(value) = table_lookup(FAMILIES, rest) {
            return Some(Mapping::single("font-family", value));
        }
        if let Some(value) = tables::font_weight(rest) {
            return Some(Mapping::single("font-weight", value));
        }
        return None;
    }

    if let Some(rest) = class.strip_prefix("text-") {
        if matches!(rest, "left" | "center" | "right" | "justify") {
            return Some(Mapping::single("text-align", rest));
        }
        if let Some(value) = tables::font_size(rest) {
            return Some(Mapping::single("font-size", value));
        }
        if let Some(value) = tables::palette(rest) {
            return Some(Mapping::single("color", value));
        }
        // shaded/compound color suffixes stay unresolved; the rule layer
        // owns the rejection
        return Some(Mapping::single("color", rest));
    }

    if let Some(rest) = class.strip_prefix("whitespace-")
        && WHITESPACE.contains(&rest)
    {
        return Some(Mapping::single("white-space", rest));
    }

    if let Some(rest) = class.strip_prefix("leading-") {
        if let Some(value) = table_lookup(LEADING, rest) {
            return Some(Mapping::single("line-height", value));
        }
        if let Some(value) = scale_value(rest) {
            return Some(Mapping::single("line-height", value));
        }
        return None;
    }

    if let Some(rest) = class.strip_prefix("tracking-")
        && let Some(value) = table_lookup(TRACKING, rest)
    {
        return Some(Mapping::single("letter-spacing", value));
    }

    None
}
