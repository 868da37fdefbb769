//! Regex pattern rules, evaluated in declaration order with first match wins.
//!
//! Two tables: the general pattern table covering broad unsupported families,
//! and the comprehensive table covering color/margin/display productions that
//! need tighter anchoring.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Reason, note, reason, verdict};
use crate::types::Verdict;

struct PatternRule {
    pattern: Regex,
    supported: bool,
    reason: Option<Reason>,
    note: Option<&'static str>,
}

fn deny(pattern: &str, reason: &'static str) -> PatternRule {
    PatternRule {
        pattern: Regex::new(pattern).expect("static pattern"),
        supported: false,
        reason: Some(Reason::Text(reason)),
        note: None,
    }
}

fn allow(pattern: &str, note: Option<&'static str>) -> PatternRule {
    PatternRule {
        pattern: Regex::new(pattern).expect("static pattern"),
        supported: true,
        reason: None,
        note,
    }
}

/// General pattern rules. Narrow patterns precede broad ones; the bare
/// `shadow` pattern is deliberately substring-anchored so every shadow class
/// is covered.
static PATTERN_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        deny(
            r"^(hover|focus|focus-within|focus-visible|active|visited|disabled|checked|first|last|odd|even|group-hover|group-focus):",
            reason::PSEUDO_CLASS,
        ),
        // any remaining variant prefix (motion-safe:, print:, ...)
        deny(r"^[a-z][a-z0-9-]*:", reason::PSEUDO_CLASS),
        deny(r"^ring", reason::RING),
        deny(r"shadow", reason::SHADOW),
        deny(r"^(fill|stroke)-", reason::SVG),
        deny(r"^table-", reason::TABLE),
        deny(r"^list-", reason::LIST),
        deny(r"^placeholder-", reason::PLACEHOLDER),
        deny(r"^overscroll-", reason::OVERSCROLL),
        deny(r"^appearance-", reason::APPEARANCE),
        deny(r"^outline-", reason::OUTLINE),
        deny(r"^gap-", reason::GAP),
        deny(
            r"^(normal-nums|ordinal|slashed-zero|lining-nums|oldstyle-nums|proportional-nums|tabular-nums|diagonal-fractions|stacked-fractions)$",
            reason::FONT_VARIANT,
        ),
        deny(r"^(antialiased|subpixel-antialiased)$", reason::FONT_SMOOTHING),
        deny(r"^text-opacity-", reason::TEXT_OPACITY),
        deny(r"^break-(normal|words|all)$", reason::WORD_BREAK),
        deny(r"^resize", reason::RESIZE),
        deny(r"^select-", reason::USER_SELECT),
        deny(r"^(space|divide)-", reason::NOT_SELECTOR),
        // cursor classes render, but the cursor itself is the host's job
        allow(r"^cursor-", Some(note::CURSOR)),
    ]
});

/// Comprehensive pattern rules for color, margin, and display productions.
static COMPREHENSIVE_RULES: Lazy<Vec<PatternRule>> = Lazy::new(|| {
    vec![
        deny(
            r"^(bg|text|border)-(slate|gray|zinc|neutral|stone|red|orange|amber|yellow|lime|green|emerald|teal|cyan|sky|blue|indigo|violet|purple|fuchsia|pink|rose)-\d{2,3}$",
            reason::COLOR_SHADE,
        ),
        allow(
            r"^(bg|text|border)-(black|white|red|orange|yellow|green|blue|purple|pink|gray|transparent|current)$",
            None,
        ),
        deny(r"^-?m[trblxy]?-auto$", reason::AUTO_MARGIN),
        deny(r"^(inline-flex|flow-root|table)$", reason::DISPLAY_VARIANT),
        // shadowed by the general cursor pattern, which is consulted first;
        // the observed verdict for cursor-not-allowed is supported-with-note
        deny(r"^cursor-not-allowed$", reason::CURSOR_NOT_ALLOWED),
    ]
});

fn run(table: &[PatternRule], class: &str) -> Option<Verdict> {
    table
        .iter()
        .find(|rule| rule.pattern.is_match(class))
        .map(|rule| verdict(rule.supported, rule.reason.as_ref(), rule.note, class))
}

/// Evaluate the general pattern table against a class name.
pub fn match_pattern(class: &str) -> Option<Verdict> {
    run(&PATTERN_RULES, class)
}

/// Evaluate the comprehensive pattern table against a class name.
pub fn match_comprehensive(class: &str) -> Option<Verdict> {
    run(&COMPREHENSIVE_RULES, class)
}
