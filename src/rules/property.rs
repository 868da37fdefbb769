//! Property-based rules, array-property rules for multi mappings, and the
//! grid family check.

use super::{Reason, note, reason, verdict};
use crate::types::{PropertyMapping, Verdict};

/// How a property rule constrains the resolved value.
enum ValueMatch {
    Exact(&'static str),
    OneOf(&'static [&'static str]),
    Any,
}

impl ValueMatch {
    fn matches(&self, value: &str) -> bool {
        match self {
            ValueMatch::Exact(v) => *v == value,
            ValueMatch::OneOf(vs) => vs.contains(&value),
            ValueMatch::Any => true,
        }
    }
}

struct PropertyRule {
    property: &'static str,
    value: ValueMatch,
    supported: bool,
    reason: Option<Reason>,
    note: Option<&'static str>,
}

const fn deny(property: &'static str, value: ValueMatch, why: Reason) -> PropertyRule {
    PropertyRule {
        property,
        value,
        supported: false,
        reason: Some(why),
        note: None,
    }
}

const fn allow_with_note(
    property: &'static str,
    value: ValueMatch,
    note: &'static str,
) -> PropertyRule {
    PropertyRule {
        property,
        value,
        supported: true,
        reason: None,
        note: Some(note),
    }
}

static PROPERTY_RULES: &[PropertyRule] = &[
    deny(
        "display",
        ValueMatch::OneOf(&[
            "grid",
            "inline-grid",
            "table",
            "table-row",
            "table-cell",
            "contents",
            "list-item",
            "flow-root",
        ]),
        Reason::Template(|v| format!("display: {v} is not supported by the rendering engine")),
    ),
    deny(
        "position",
        ValueMatch::OneOf(&["static", "sticky"]),
        Reason::Template(|v| {
            format!("position: {v} is not supported; use relative, absolute, or fixed")
        }),
    ),
    deny("flex-grow", ValueMatch::Any, Reason::Text(reason::FLEX_GROW)),
    deny(
        "flex-shrink",
        ValueMatch::Any,
        Reason::Text(reason::FLEX_SHRINK),
    ),
    deny(
        "justify-content",
        ValueMatch::OneOf(&["space-around", "space-evenly"]),
        Reason::Template(|v| format!("justify-content: {v} is not implemented")),
    ),
    deny(
        "align-items",
        ValueMatch::Exact("baseline"),
        Reason::Text(reason::ALIGN_BASELINE),
    ),
    deny(
        "align-content",
        ValueMatch::Any,
        Reason::Text(reason::ALIGN_CONTENT),
    ),
    deny(
        "background-attachment",
        ValueMatch::OneOf(&["fixed", "local"]),
        Reason::Text(reason::BG_ATTACHMENT),
    ),
    deny(
        "background-repeat",
        ValueMatch::OneOf(&["round", "space"]),
        Reason::Text(reason::BG_REPEAT_EDGE),
    ),
    deny(
        "border-style",
        ValueMatch::Exact("double"),
        Reason::Text(reason::BORDER_STYLE),
    ),
    deny(
        "white-space",
        ValueMatch::Exact("pre-line"),
        Reason::Text(reason::WHITE_SPACE),
    ),
    deny(
        "visibility",
        ValueMatch::Exact("collapse"),
        Reason::Text(reason::VISIBILITY_COLLAPSE),
    ),
    // property-level blanket bans
    deny(
        "-webkit-font-smoothing",
        ValueMatch::Any,
        Reason::Text(reason::FONT_SMOOTHING),
    ),
    deny("word-break", ValueMatch::Any, Reason::Text(reason::WORD_BREAK)),
    deny(
        "overflow-wrap",
        ValueMatch::Any,
        Reason::Text(reason::WORD_BREAK),
    ),
    deny("appearance", ValueMatch::Any, Reason::Text(reason::APPEARANCE)),
    deny("outline", ValueMatch::Any, Reason::Text(reason::OUTLINE)),
    deny(
        "user-select",
        ValueMatch::Any,
        Reason::Text(reason::USER_SELECT),
    ),
    deny("float", ValueMatch::Any, Reason::Text(reason::FLOAT)),
    deny("clear", ValueMatch::Any, Reason::Text(reason::CLEAR)),
    deny("order", ValueMatch::Any, Reason::Text(reason::ORDER)),
    // supported, but the host has work to do
    allow_with_note("cursor", ValueMatch::Exact("pointer"), note::CURSOR),
    allow_with_note("font-family", ValueMatch::Any, note::FONT_FAMILY),
];

/// Evaluate the property rule table against one resolved mapping.
pub fn match_property(property: &str, value: &str) -> Option<Verdict> {
    PROPERTY_RULES
        .iter()
        .find(|rule| rule.property == property && rule.value.matches(value))
        .map(|rule| verdict(rule.supported, rule.reason.as_ref(), rule.note, value))
}

/// Array-property rules: applied to each element of a multi-property
/// expansion; the first match among any element wins.
struct ArrayRule {
    predicate: fn(&PropertyMapping) -> bool,
    reason: &'static str,
}

static ARRAY_RULES: &[ArrayRule] = &[
    ArrayRule {
        predicate: |m| m.property.starts_with("margin") && m.value == "auto",
        reason: reason::AUTO_MARGIN,
    },
    // catch-all for values the mapper passed through unresolved, e.g. a
    // shaded color suffix that reached an axis shorthand
    ArrayRule {
        predicate: |m| {
            let value = m.value.strip_prefix('-').unwrap_or(&m.value);
            value.contains('-')
                && value.chars().any(|c| c.is_ascii_alphabetic())
                && value.parse::<f64>().is_err()
        },
        reason: reason::UNKNOWN_VALUE,
    },
];

/// Evaluate the array rules over a multi-property mapping.
pub fn match_array(mappings: &[PropertyMapping]) -> Option<Verdict> {
    for rule in ARRAY_RULES {
        if mappings.iter().any(|m| (rule.predicate)(m)) {
            return Some(Verdict::fail(rule.reason));
        }
    }
    None
}

/// Grid family check: `order-` classes and anything whose resolved property
/// mentions grid are rejected wholesale.
pub fn match_grid(class: &str, mappings: &[PropertyMapping]) -> Option<Verdict> {
    let is_grid =
        class.starts_with("order-") || mappings.iter().any(|m| m.property.contains("grid"));
    is_grid.then(|| Verdict::fail(reason::GRID))
}
