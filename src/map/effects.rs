//! Visual effect classes: backgrounds, shadows, borders, radii, opacity,
//! and transform functions.

use super::{is_integer, scale_value, table_lookup};
use crate::tables;
use crate::types::Mapping;

/// Shadow depth levels are a closed enumeration; values are resolved for
/// documentation purposes even though the rule layer rejects the family.
const SHADOWS: &[(&str, &str)] = &[
    ("shadow-sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    ("shadow", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
    (
        "shadow-md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "shadow-lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "shadow-xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("shadow-2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("shadow-inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("shadow-none", "none"),
];

const GRADIENT_DIRECTIONS: &[(&str, &str)] = &[
    ("t", "to top"),
    ("tr", "to top right"),
    ("r", "to right"),
    ("br", "to bottom right"),
    ("b", "to bottom"),
    ("bl", "to bottom left"),
    ("l", "to left"),
    ("tl", "to top left"),
];

const ROUNDED: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "none"];

pub fn map(class: &str) -> Option<Mapping> {
    if let Some(value) = table_lookup(SHADOWS, class) {
        return Some(Mapping::single("box-shadow", value));
    }

    if class == "rounded" {
        return Some(Mapping::single("border-radius", "0.25rem"));
    }
    if let Some(rest) = class.strip_prefix("rounded-")
        && let Some(value) = table_lookup(ROUNDED, rest)
    {
        return Some(Mapping::single("border-radius", value));
    }

    if let Some(rest) = class.strip_prefix("bg-") {
        return map_background(rest);
    }

    if class == "border" {
        return Some(Mapping::single("border-width", "1px"));
    }
    if let Some(rest) = class.strip_prefix("border-") {
        return map_border(rest);
    }

    if let Some(rest) = class.strip_prefix("opacity-")
        && is_integer(rest)
    {
        return Some(Mapping::single("opacity", hundredths(rest)?));
    }

    map_transform(class)
}

fn map_background(rest: &str) -> Option<Mapping> {
    match rest {
        "fixed" | "local" | "scroll" => {
            return Some(Mapping::single("background-attachment", rest));
        }
        "repeat" => return Some(Mapping::single("background-repeat", "repeat")),
        "no-repeat" => return Some(Mapping::single("background-repeat", "no-repeat")),
        "repeat-x" => return Some(Mapping::single("background-repeat", "repeat-x")),
        "repeat-y" => return Some(Mapping::single("background-repeat", "repeat-y")),
        "repeat-round" => return Some(Mapping::single("background-repeat", "round")),
        "repeat-space" => return Some(Mapping::single("background-repeat", "space")),
        _ => {}
    }
    if let Some(direction) = rest.strip_prefix("gradient-to-")
        && let Some(dir) = table_lookup(GRADIENT_DIRECTIONS, direction)
    {
        return Some(Mapping::single(
            "background-image",
            format!("linear-gradient({dir}, var(--tw-gradient-stops))"),
        ));
    }
    if let Some(color) = tables::palette(rest) {
        return Some(Mapping::single("background-color", color));
    }
    // shaded suffixes pass through unresolved for the rule layer
    Some(Mapping::single("background-color", rest))
}

fn map_border(rest: &str) -> Option<Mapping> {
    if BORDER_STYLES.contains(&rest) {
        return Some(Mapping::single("border-style", rest));
    }
    if let Some(side) = tables::side(rest) {
        return Some(Mapping::single(format!("border-{side}-width"), "1px"));
    }
    if let Some((side_token, width)) = rest.split_once('-')
        && let Some(side) = tables::side(side_token)
        && is_integer(width)
    {
        return Some(Mapping::single(
            format!("border-{side}-width"),
            format!("{width}px"),
        ));
    }
    if is_integer(rest) {
        return Some(Mapping::single("border-width", format!("{rest}px")));
    }
    if let Some(color) = tables::palette(rest) {
        return Some(Mapping::single("border-color", color));
    }
    Some(Mapping::single("border-color", rest))
}

fn map_transform(class: &str) -> Option<Mapping> {
    let (negated, body) = match class.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, class),
    };
    let sign = if negated { "-" } else { "" };

    if let Some(deg) = body.strip_prefix("rotate-")
        && is_integer(deg)
    {
        return Some(Mapping::single("transform", format!("rotate({sign}{deg}deg)")));
    }
    if let Some(deg) = body.strip_prefix("skew-x-")
        && is_integer(deg)
    {
        return Some(Mapping::single("transform", format!("skewX({sign}{deg}deg)")));
    }
    if let Some(deg) = body.strip_prefix("skew-y-")
        && is_integer(deg)
    {
        return Some(Mapping::single("transform", format!("skewY({sign}{deg}deg)")));
    }
    if let Some(n) = body.strip_prefix("scale-x-")
        && is_integer(n)
    {
        return Some(Mapping::single("transform", format!("scaleX({})", hundredths(n)?)));
    }
    if let Some(n) = body.strip_prefix("scale-y-")
        && is_integer(n)
    {
        return Some(Mapping::single("transform", format!("scaleY({})", hundredths(n)?)));
    }
    if let Some(n) = body.strip_prefix("scale-")
        && is_integer(n)
    {
        return Some(Mapping::single("transform", format!("scale({})", hundredths(n)?)));
    }
    if let Some(key) = body.strip_prefix("translate-x-")
        && let Some(value) = scale_value(key)
    {
        return Some(Mapping::single("transform", format!("translateX({sign}{value})")));
    }
    if let Some(key) = body.strip_prefix("translate-y-")
        && let Some(value) = scale_value(key)
    {
        return Some(Mapping::single("transform", format!("translateY({sign}{value})")));
    }
    None
}

/// Format an integer percentage-style suffix as a decimal fraction
/// (`50` -> `0.5`, `105` -> `1.05`).
fn hundredths(digits: &str) -> Option<String> {
    let n: u32 = digits.parse().ok()?;
    let whole = n / 100;
    let frac = n % 100;
    Some(if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    })
}
