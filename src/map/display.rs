//! Display, position, visibility, box-sizing, float, and clear classes.

use super::table_lookup;
use crate::types::Mapping;

/// `hidden` is the one irregular alias; everything else maps to its literal
/// display keyword.
const DISPLAY: &[(&str, &str)] = &[
    ("block", "block"),
    ("inline-block", "inline-block"),
    ("inline", "inline"),
    ("flex", "flex"),
    ("inline-flex", "inline-flex"),
    ("grid", "grid"),
    ("inline-grid", "inline-grid"),
    ("table", "table"),
    ("table-row", "table-row"),
    ("table-cell", "table-cell"),
    ("flow-root", "flow-root"),
    ("contents", "contents"),
    ("list-item", "list-item"),
    ("hidden", "none"),
];

const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];

pub fn map(class: &str) -> Option<Mapping> {
    if let Some(value) = table_lookup(DISPLAY, class) {
        return Some(Mapping::single("display", value));
    }
    if POSITION.contains(&class) {
        return Some(Mapping::single("position", class));
    }
    match class {
        "visible" => return Some(Mapping::single("visibility", "visible")),
        "invisible" => return Some(Mapping::single("visibility", "hidden")),
        "collapse" => return Some(Mapping::single("visibility", "collapse")),
        "box-border" => return Some(Mapping::single("box-sizing", "border-box")),
        "box-content" => return Some(Mapping::single("box-sizing", "content-box")),
        _ => {}
    }
    if let Some(rest) = class.strip_prefix("float-")
        && matches!(rest, "left" | "right" | "none")
    {
        return Some(Mapping::single("float", rest));
    }
    if let Some(rest) = class.strip_prefix("clear-")
        && matches!(rest, "left" | "right" | "both" | "none")
    {
        return Some(Mapping::single("clear", rest));
    }
    None
}
