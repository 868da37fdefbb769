//! Compatibility rule tables and matchers.
//!
//! Rules come in a closed set of kinds (pattern, exact, property, array,
//! grid, combination), each with one evaluator. Tables are immutable statics;
//! within a table the declaration order is significant (first match wins), so
//! narrow patterns must be declared before broader ones where they overlap.

mod exact;
mod patterns;
mod property;

#[cfg(test)]
mod tests;

pub use exact::{match_combination, match_exact};
pub use patterns::{match_comprehensive, match_pattern};
pub use property::{match_array, match_grid, match_property};

use crate::types::Verdict;

/// Reason message catalog. One string (or template) per violated rule.
pub mod reason {
    pub const MEDIA_QUERY: &str =
        "Media queries are not supported; responsive breakpoint prefixes have no effect";
    pub const PSEUDO_CLASS: &str =
        "Pseudo-class and variant selectors are not supported by the rendering engine";
    pub const SHADOW: &str =
        "box-shadow values rely on CSS custom properties, which the engine does not resolve";
    pub const RING: &str =
        "Ring utilities are built on CSS custom properties and box-shadow composition";
    pub const SVG: &str = "SVG fill/stroke styling is not supported";
    pub const TABLE: &str = "Table layout utilities are not supported";
    pub const LIST: &str = "List style utilities are not supported";
    pub const PLACEHOLDER: &str = "::placeholder pseudo-element styling is not supported";
    pub const OVERSCROLL: &str = "overscroll-behavior is not implemented";
    pub const APPEARANCE: &str = "The appearance property is not implemented";
    pub const OUTLINE: &str = "The outline property is not implemented";
    pub const GAP: &str = "The gap property is not supported without grid or flex gap support";
    pub const FONT_VARIANT: &str = "font-variant-numeric is not implemented";
    pub const FONT_SMOOTHING: &str = "Font smoothing properties are not implemented";
    pub const TEXT_OPACITY: &str =
        "Text opacity utilities rely on CSS custom properties for color composition";
    pub const WORD_BREAK: &str = "word-break and overflow-wrap are not implemented";
    pub const RESIZE: &str = "The resize property is not implemented";
    pub const USER_SELECT: &str = "The user-select property is not implemented";
    pub const NOT_SELECTOR: &str =
        "Space and divide utilities require :not() child selectors, which are not supported";
    pub const COLOR_SHADE: &str =
        "Shaded palette colors resolve through CSS custom properties; use a base color or a hex value";
    pub const AUTO_MARGIN: &str = "margin: auto is not supported by the layout engine";
    pub const DISPLAY_VARIANT: &str = "This display variant is not implemented";
    pub const CURSOR_NOT_ALLOWED: &str = "The not-allowed cursor has no native equivalent";
    pub const BOX_CONTENT: &str = "box-sizing: content-box is not supported; all boxes are border-box";
    pub const SR_ONLY: &str =
        "Screen-reader utilities depend on clip and absolute positioning tricks that do not render";
    pub const CONTAINER: &str = "The container utility requires media queries";
    pub const ISOLATION: &str = "The isolation property is not implemented";
    pub const TRANSITION: &str = "CSS transitions are not implemented";
    pub const GRID: &str = "Grid layout is not supported by the rendering engine";
    pub const UNKNOWN_VALUE: &str = "Unresolved value; this suffix is not in any supported scale";
    pub const FLEX_GROW: &str =
        "flex-grow cannot be set individually; use the flex shorthand utilities";
    pub const FLEX_SHRINK: &str =
        "flex-shrink cannot be set individually; use the flex shorthand utilities";
    pub const ALIGN_BASELINE: &str = "align-items: baseline is not implemented";
    pub const ALIGN_CONTENT: &str = "align-content is not implemented";
    pub const BG_ATTACHMENT: &str = "Only background-attachment: scroll is supported";
    pub const BG_REPEAT_EDGE: &str =
        "background-repeat: round and space are not implemented";
    pub const BORDER_STYLE: &str = "Only solid, dashed, dotted, and none border styles render";
    pub const WHITE_SPACE: &str = "white-space: pre-line is not implemented";
    pub const VISIBILITY_COLLAPSE: &str = "visibility: collapse behaves like hidden; avoid it";
    pub const FLOAT: &str = "The float property is not supported by the layout engine";
    pub const CLEAR: &str = "The clear property is not supported by the layout engine";
    pub const ORDER: &str = "The order property is not supported by the layout engine";
    pub const GIF_URL: &str = "Animated GIF resources are not supported in style URLs";
    pub const LEGACY_UNIT: &str =
        "Legacy absolute units (pt, pc, in, cm, mm) and percentages are not supported here";
}

/// Advisory note catalog, attached to supported verdicts.
pub mod note {
    pub const CURSOR: &str =
        "Cursor styles require a native implementation in the embedding application";
    pub const FONT_FAMILY: &str =
        "Custom font families must be preloaded by the host before first paint";
}

/// A rule reason: either a fixed string or a function of the matched value.
///
/// Template functions must be total over the declared value domain and never
/// panic.
#[derive(Clone, Copy)]
pub enum Reason {
    Text(&'static str),
    Template(fn(&str) -> String),
}

impl Reason {
    pub fn render(&self, value: &str) -> String {
        match self {
            Reason::Text(text) => (*text).to_string(),
            Reason::Template(f) => f(value),
        }
    }
}

/// Build a verdict from a rule's outcome fields.
pub(crate) fn verdict(
    supported: bool,
    reason: Option<&Reason>,
    note: Option<&'static str>,
    value: &str,
) -> Verdict {
    Verdict {
        supported,
        reason: reason.map(|r| r.render(value)),
        note: note.map(str::to_string),
    }
}
