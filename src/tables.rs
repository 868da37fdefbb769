//! Static value tables consulted by the class-to-property mappers.
//!
//! Pure data, immutable for the lifetime of the process. Scale keys absent
//! from a table deliberately fall through to the caller (see the mappers for
//! the pass-through semantics).

/// Spacing scale: class suffix key to literal length value.
///
/// Used by the margin/padding/width/height/gap/inset families.
pub const SPACING: &[(&str, &str)] = &[
    ("0", "0"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
    ("px", "1px"),
    ("auto", "auto"),
    ("full", "100%"),
    ("1/2", "50%"),
    ("1/3", "33.333333%"),
    ("2/3", "66.666667%"),
    ("1/4", "25%"),
    ("2/4", "50%"),
    ("3/4", "75%"),
];

/// Font size scale: `text-<key>` suffix to font-size value.
pub const FONT_SIZE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

/// Font weight scale: `font-<key>` suffix to numeric weight.
pub const FONT_WEIGHT: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

/// Base color palette: bare color names resolve to literal colors.
///
/// Shaded suffixes (`red-500`) are intentionally absent; the rule layer
/// rejects them and the mappers pass them through unresolved.
pub const PALETTE: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ef4444"),
    ("orange", "#f97316"),
    ("yellow", "#eab308"),
    ("green", "#22c55e"),
    ("blue", "#3b82f6"),
    ("purple", "#a855f7"),
    ("pink", "#ec4899"),
    ("gray", "#6b7280"),
    ("transparent", "transparent"),
    ("current", "currentColor"),
];

/// Single-letter side tokens used by border and inset shorthands.
pub const SIDES: &[(&str, &str)] = &[
    ("t", "top"),
    ("r", "right"),
    ("b", "bottom"),
    ("l", "left"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Resolve a spacing scale key.
pub fn spacing(key: &str) -> Option<&'static str> {
    lookup(SPACING, key)
}

/// Resolve a font size key.
pub fn font_size(key: &str) -> Option<&'static str> {
    lookup(FONT_SIZE, key)
}

/// Resolve a font weight key.
pub fn font_weight(key: &str) -> Option<&'static str> {
    lookup(FONT_WEIGHT, key)
}

/// Resolve a base palette color name.
pub fn palette(name: &str) -> Option<&'static str> {
    lookup(PALETTE, name)
}

/// Resolve a single-letter side token to its physical side name.
pub fn side(token: &str) -> Option<&'static str> {
    lookup(SIDES, token)
}
