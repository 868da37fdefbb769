//! Flexbox classes: direction, wrap, flex shorthand, grow/shrink,
//! justification, alignment, and order.

use super::{is_integer, scale_value, table_lookup};
use crate::types::Mapping;

const EXACT: &[(&str, (&str, &str))] = &[
    ("flex-row", ("flex-direction", "row")),
    ("flex-row-reverse", ("flex-direction", "row-reverse")),
    ("flex-col", ("flex-direction", "column")),
    ("flex-col-reverse", ("flex-direction", "column-reverse")),
    ("flex-wrap", ("flex-wrap", "wrap")),
    ("flex-wrap-reverse", ("flex-wrap", "wrap-reverse")),
    ("flex-nowrap", ("flex-wrap", "nowrap")),
    ("flex-1", ("flex", "1 1 0%")),
    ("flex-auto", ("flex", "1 1 auto")),
    ("flex-initial", ("flex", "0 1 auto")),
    ("flex-none", ("flex", "none")),
    ("grow", ("flex-grow", "1")),
    ("grow-0", ("flex-grow", "0")),
    ("flex-grow", ("flex-grow", "1")),
    ("flex-grow-0", ("flex-grow", "0")),
    ("shrink", ("flex-shrink", "1")),
    ("shrink-0", ("flex-shrink", "0")),
    ("flex-shrink", ("flex-shrink", "1")),
    ("flex-shrink-0", ("flex-shrink", "0")),
    ("order-first", ("order", "-9999")),
    ("order-last", ("order", "9999")),
    ("order-none", ("order", "0")),
];

const JUSTIFY: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
];

const ITEMS: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("baseline", "baseline"),
    ("stretch", "stretch"),
];

const CONTENT: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("between", "space-between"),
    ("around", "space-around"),
    ("evenly", "space-evenly"),
];

const SELF: &[(&str, &str)] = &[
    ("auto", "auto"),
    ("start", "flex-start"),
    ("end", "flex-end"),
    ("center", "center"),
    ("stretch", "stretch"),
    ("baseline", "baseline"),
];

pub fn map(class: &str) -> Option<Mapping> {
    if let Some((property, value)) = EXACT.iter().find(|(k, _)| *k == class).map(|(_, pv)| *pv) {
        return Some(Mapping::single(property, value));
    }
    if let Some(rest) = class.strip_prefix("justify-")
        && let Some(value) = table_lookup(JUSTIFY, rest)
    {
        return Some(Mapping::single("justify-content", value));
    }
    if let Some(rest) = class.strip_prefix("items-")
        && let Some(value) = table_lookup(ITEMS, rest)
    {
        return Some(Mapping::single("align-items", value));
    }
    if let Some(rest) = class.strip_prefix("content-")
        && let Some(value) = table_lookup(CONTENT, rest)
    {
        return Some(Mapping::single("align-content", value));
    }
    if let Some(rest) = class.strip_prefix("self-")
        && let Some(value) = table_lookup(SELF, rest)
    {
        return Some(Mapping::single("align-self", value));
    }
    if let Some(rest) = class.strip_prefix("order-")
        && is_integer(rest)
    {
        return Some(Mapping::single("order", rest));
    }
    if let Some(rest) = class.strip_prefix("basis-")
        && let Some(value) = scale_value(rest)
    {
        return Some(Mapping::single("flex-basis", value));
    }
    None
}
