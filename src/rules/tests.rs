//! Rule table and matcher tests.

use super::*;
use crate::types::PropertyMapping;

// ============================================================================
// Pattern rules
// ============================================================================

#[test]
fn test_pattern_shadow_family() {
    for class in ["shadow", "shadow-lg", "shadow-none", "drop-shadow"] {
        let verdict = match_pattern(class).expect("shadow pattern should match");
        assert!(!verdict.supported, "{class} should be unsupported");
        assert!(
            verdict.reason.unwrap().contains("custom properties"),
            "{class} reason should mention custom properties"
        );
    }
}

#[test]
fn test_pattern_pseudo_class_prefixes() {
    for class in ["hover:bg-red", "focus:underline", "group-hover:flex", "motion-safe:block"] {
        let verdict = match_pattern(class).expect("pseudo pattern should match");
        assert!(!verdict.supported);
        assert!(verdict.reason.unwrap().contains("Pseudo-class"));
    }
}

#[test]
fn test_pattern_unsupported_families() {
    for class in [
        "ring-2",
        "fill-current",
        "table-fixed",
        "list-disc",
        "placeholder-gray",
        "overscroll-contain",
        "outline-white",
        "gap-4",
        "tabular-nums",
        "antialiased",
        "text-opacity-50",
        "break-words",
        "resize-none",
        "select-none",
        "space-x-4",
        "divide-y",
    ] {
        let verdict = match_pattern(class)
            .unwrap_or_else(|| panic!("{class} should match a pattern rule"));
        assert!(!verdict.supported, "{class} should be unsupported");
        assert!(verdict.reason.is_some(), "{class} must carry a reason");
    }
}

#[test]
fn test_pattern_cursor_supported_with_note() {
    let verdict = match_pattern("cursor-pointer").expect("cursor pattern should match");
    assert!(verdict.supported);
    assert!(
        verdict.note.unwrap().contains("native implementation"),
        "cursor note should mention the native implementation requirement"
    );
}

#[test]
fn test_pattern_no_match_for_plain_classes() {
    assert_eq!(match_pattern("flex"), None);
    assert_eq!(match_pattern("mt-4"), None);
}

// ============================================================================
// Comprehensive pattern rules
// ============================================================================

#[test]
fn test_comprehensive_color_shades_rejected() {
    for class in ["bg-red-500", "text-sky-300", "border-gray-100"] {
        let verdict = match_comprehensive(class).expect("shade pattern should match");
        assert!(!verdict.supported, "{class} should be unsupported");
    }
}

#[test]
fn test_comprehensive_basic_colors_allowed() {
    for class in ["bg-red", "text-white", "border-black", "bg-transparent"] {
        let verdict = match_comprehensive(class).expect("basic color pattern should match");
        assert!(verdict.supported, "{class} should be supported");
        assert_eq!(verdict.reason, None);
    }
}

#[test]
fn test_comprehensive_auto_margins_rejected() {
    for class in ["m-auto", "mx-auto", "mt-auto", "-mx-auto"] {
        let verdict = match_comprehensive(class).expect("auto margin pattern should match");
        assert!(!verdict.supported, "{class} should be unsupported");
        assert!(verdict.reason.unwrap().contains("auto"));
    }
}

#[test]
fn test_comprehensive_display_variants_rejected() {
    for class in ["inline-flex", "flow-root", "table"] {
        let verdict = match_comprehensive(class).expect("display variant should match");
        assert!(!verdict.supported);
    }
}

#[test]
fn test_cursor_not_allowed_tables_disagree() {
    // the two tables are deliberately independent: the general cursor
    // pattern allows with a note, the narrow rule rejects; precedence in the
    // engine decides which one the caller observes
    assert!(match_pattern("cursor-not-allowed").unwrap().supported);
    assert!(!match_comprehensive("cursor-not-allowed").unwrap().supported);
}

// ============================================================================
// Exact and combination rules
// ============================================================================

#[test]
fn test_exact_rules() {
    assert!(!match_exact("box-content").unwrap().supported);
    assert!(!match_exact("sr-only").unwrap().supported);
    assert!(!match_exact("container").unwrap().supported);
    assert!(match_exact("box-border").unwrap().supported);
    assert_eq!(match_exact("flex"), None);
}

#[test]
fn test_combination_rules_require_property() {
    assert!(
        match_combination("bg-black", "background-color")
            .unwrap()
            .supported
    );
    // same class, wrong property: no match
    assert_eq!(match_combination("bg-black", "color"), None);
    let verdict = match_combination("text-justify", "text-align").unwrap();
    assert!(!verdict.supported);
}

// ============================================================================
// Property rules
// ============================================================================

#[test]
fn test_property_rule_templated_reason() {
    let verdict = match_property("display", "grid").expect("display grid rule");
    assert!(!verdict.supported);
    assert_eq!(
        verdict.reason.as_deref(),
        Some("display: grid is not supported by the rendering engine")
    );

    let verdict = match_property("position", "sticky").expect("position rule");
    assert!(verdict.reason.unwrap().contains("position: sticky"));
}

#[test]
fn test_property_rule_value_sets() {
    assert!(!match_property("justify-content", "space-around").unwrap().supported);
    assert_eq!(match_property("justify-content", "space-between"), None);
    assert!(!match_property("background-attachment", "fixed").unwrap().supported);
    assert_eq!(match_property("background-attachment", "scroll"), None);
}

#[test]
fn test_property_rule_blanket_bans() {
    for (property, value) in [
        ("float", "left"),
        ("clear", "both"),
        ("order", "3"),
        ("user-select", "none"),
        ("appearance", "none"),
        ("word-break", "break-all"),
    ] {
        let verdict = match_property(property, value)
            .unwrap_or_else(|| panic!("{property} should have a blanket rule"));
        assert!(!verdict.supported, "{property}: {value} should be unsupported");
    }
}

#[test]
fn test_property_rule_supported_exceptions() {
    let cursor = match_property("cursor", "pointer").expect("cursor exception");
    assert!(cursor.supported);
    assert!(cursor.note.is_some());
    // only pointer is excepted
    assert_eq!(match_property("cursor", "wait"), None);

    let family = match_property("font-family", "ui-serif, Georgia, serif").unwrap();
    assert!(family.supported);
    assert!(family.note.unwrap().contains("preloaded"));
}

#[test]
fn test_property_rule_no_match_is_none() {
    assert_eq!(match_property("display", "block"), None);
    assert_eq!(match_property("color", "#ff0000"), None);
}

// ============================================================================
// Array and grid rules
// ============================================================================

#[test]
fn test_array_rule_auto_margin() {
    let mappings = vec![
        PropertyMapping::new("margin-left", "auto"),
        PropertyMapping::new("margin-right", "auto"),
    ];
    let verdict = match_array(&mappings).expect("auto margin array rule");
    assert!(!verdict.supported);
}

#[test]
fn test_array_rule_unresolved_value() {
    let mappings = vec![
        PropertyMapping::new("padding-left", "sky-300"),
        PropertyMapping::new("padding-right", "sky-300"),
    ];
    let verdict = match_array(&mappings).expect("unresolved value heuristic");
    assert!(!verdict.supported);
}

#[test]
fn test_array_rule_clean_mappings_pass() {
    let mappings = vec![
        PropertyMapping::new("margin-left", "1rem"),
        PropertyMapping::new("margin-right", "-0.5rem"),
        PropertyMapping::new("width", "33.333333%"),
    ];
    assert_eq!(match_array(&mappings), None);
}

#[test]
fn test_grid_rule() {
    let grid_cols = [PropertyMapping::new(
        "grid-template-columns",
        "repeat(3, minmax(0, 1fr))",
    )];
    assert!(!match_grid("grid-cols-3", &grid_cols).unwrap().supported);

    let order = [PropertyMapping::new("order", "2")];
    assert!(!match_grid("order-2", &order).unwrap().supported);

    let margin = [PropertyMapping::new("margin-top", "1rem")];
    assert_eq!(match_grid("mt-4", &margin), None);
}
