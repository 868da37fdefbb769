//! Miscellaneous utility classes: overflow, z-index, cursor, object-fit,
//! vertical alignment, user-select, resize, and pointer events.

use super::is_integer;
use crate::types::Mapping;

const OVERFLOW: &[&str] = &["auto", "hidden", "visible", "scroll"];
const CURSORS: &[&str] = &[
    "auto",
    "default",
    "pointer",
    "wait",
    "text",
    "move",
    "help",
    "not-allowed",
    "none",
];
const OBJECT_FIT: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];
const VERTICAL_ALIGN: &[&str] = &["baseline", "top", "middle", "bottom", "text-top", "text-bottom"];

pub fn map(class: &str) -> Option<Mapping> {
    match class {
        "outline-none" => return Some(Mapping::single("outline", "none")),
        "appearance-none" => return Some(Mapping::single("appearance", "none")),
        "pointer-events-none" => return Some(Mapping::single("pointer-events", "none")),
        "pointer-events-auto" => return Some(Mapping::single("pointer-events", "auto")),
        "resize" => return Some(Mapping::single("resize", "both")),
        "resize-none" => return Some(Mapping::single("resize", "none")),
        "resize-x" => return Some(Mapping::single("resize", "horizontal")),
        "resize-y" => return Some(Mapping::single("resize", "vertical")),
        "select-none" => return Some(Mapping::single("user-select", "none")),
        "select-text" => return Some(Mapping::single("user-select", "text")),
        "select-all" => return Some(Mapping::single("user-select", "all")),
        "select-auto" => return Some(Mapping::single("user-select", "auto")),
        "antialiased" => return Some(Mapping::single("-webkit-font-smoothing", "antialiased")),
        "subpixel-antialiased" => return Some(Mapping::single("-webkit-font-smoothing", "auto")),
        "z-auto" => return Some(Mapping::single("z-index", "auto")),
        _ => {}
    }

    if let Some(rest) = class.strip_prefix("overflow-x-")
        && OVERFLOW.contains(&rest)
    {
        return Some(Mapping::single("overflow-x", rest));
    }
    if let Some(rest) = class.strip_prefix("overflow-y-")
        && OVERFLOW.contains(&rest)
    {
        return Some(Mapping::single("overflow-y", rest));
    }
    if let Some(rest) = class.strip_prefix("overflow-")
        && OVERFLOW.contains(&rest)
    {
        return Some(Mapping::single("overflow", rest));
    }
    if let Some(rest) = class.strip_prefix("cursor-")
        && CURSORS.contains(&rest)
    {
        return Some(Mapping::single("cursor", rest));
    }
    if let Some(rest) = class.strip_prefix("object-")
        && OBJECT_FIT.contains(&rest)
    {
        return Some(Mapping::single("object-fit", rest));
    }
    if let Some(rest) = class.strip_prefix("align-")
        && VERTICAL_ALIGN.contains(&rest)
    {
        return Some(Mapping::single("vertical-align", rest));
    }
    if let Some(rest) = class.strip_prefix("z-")
        && is_integer(rest)
    {
        return Some(Mapping::single("z-index", rest));
    }
    None
}
