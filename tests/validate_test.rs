//! End-to-end tests over the public API, mirroring how a lint host consumes
//! the checker.

use classwise::{
    Mapping, PropertyMapping, REASON_INVALID_CLASS, REASON_UNKNOWN_CLASS, ReportOptions,
    ViolationKind, class_property, class_support, validate_class_string,
};

// ============================================================================
// Mapping surface
// ============================================================================

#[test]
fn test_display_classes_map_and_pass() {
    for (class, value) in [("flex", "flex"), ("block", "block"), ("hidden", "none")] {
        let mapping = class_property(class).expect("display class should map");
        assert_eq!(mapping, Mapping::single("display", value), "{class}");
        let verdict = class_support(class);
        assert!(verdict.supported, "{class} should be supported");
        assert_eq!(verdict.reason, None);
    }
}

#[test]
fn test_mx_expands_to_two_margins() {
    let mapping = class_property("mx-4").expect("mx-4 should map");
    let Mapping::Multi(ms) = mapping else {
        panic!("mx-4 should be a multi-property mapping");
    };
    assert_eq!(ms.len(), 2);
    assert_eq!(ms[0], PropertyMapping::new("margin-left", "1rem"));
    assert_eq!(ms[1], PropertyMapping::new("margin-right", "1rem"));

    assert!(class_support("mx-4").supported);
    assert!(!class_support("mx-auto").supported, "auto margins are banned");
}

#[test]
fn test_negative_margin_resolution() {
    assert_eq!(
        class_property("-mt-2"),
        Some(Mapping::single("margin-top", "-0.5rem"))
    );
}

#[test]
fn test_mapping_is_idempotent() {
    for class in ["mx-4", "shadow-lg", "grid-cols-3", "text-red-500", "nonsense"] {
        assert_eq!(class_property(class), class_property(class), "{class}");
    }
}

// ============================================================================
// Verdict surface
// ============================================================================

#[test]
fn test_responsive_prefixes_unsupported() {
    for class in ["sm:flex", "md:flex", "lg:flex", "xl:flex", "2xl:flex"] {
        let verdict = class_support(class);
        assert!(!verdict.supported, "{class}");
        assert!(
            verdict.reason.unwrap().contains("Media queries"),
            "{class} reason should mention media queries"
        );
    }
}

#[test]
fn test_pseudo_prefixes_unsupported() {
    for class in ["hover:underline", "focus:flex", "active:bg-red", "group-hover:block"] {
        let verdict = class_support(class);
        assert!(!verdict.supported, "{class}");
        assert!(verdict.reason.unwrap().contains("Pseudo-class"), "{class}");
    }
}

#[test]
fn test_shadow_rejected_but_mapped() {
    for class in ["shadow", "shadow-lg", "shadow-none"] {
        let verdict = class_support(class);
        assert!(!verdict.supported, "{class}");
        assert!(verdict.reason.unwrap().contains("custom properties"));

        // mapping still documents the literal box-shadow value
        let Some(Mapping::Single(m)) = class_property(class) else {
            panic!("{class} should still resolve");
        };
        assert_eq!(m.property, "box-shadow");
    }
}

#[test]
fn test_grid_rejected_but_mapped() {
    assert!(!class_support("grid").supported);
    assert!(!class_support("grid-cols-3").supported);
    assert!(!class_support("col-span-2").supported);

    assert_eq!(
        class_property("grid-cols-3"),
        Some(Mapping::single(
            "grid-template-columns",
            "repeat(3, minmax(0, 1fr))"
        ))
    );
}

#[test]
fn test_unknown_and_invalid_sentinels() {
    let unknown = class_support("totally-made-up-class");
    assert!(!unknown.supported);
    assert_eq!(unknown.reason.as_deref(), Some(REASON_UNKNOWN_CLASS));

    let invalid = class_support("");
    assert!(!invalid.supported);
    assert_eq!(invalid.reason.as_deref(), Some(REASON_INVALID_CLASS));
}

// ============================================================================
// Batch surface
// ============================================================================

#[test]
fn test_class_string_end_to_end() {
    let violations = validate_class_string("flex p-4 shadow-lg grid", &ReportOptions::default());

    assert_eq!(violations.len(), 2);
    assert_eq!(violations[0].class_name, "shadow-lg");
    assert_eq!(violations[0].kind, ViolationKind::Class);
    assert_eq!(violations[1].class_name, "grid");
    assert_eq!(violations[1].kind, ViolationKind::Class);
}

#[test]
fn test_cursor_info_surfaced_only_on_request() {
    let verdict = class_support("cursor-pointer");
    assert!(verdict.supported);
    let note = verdict.note.expect("cursor-pointer carries a note");
    assert!(note.contains("native implementation"));

    let silent = validate_class_string("cursor-pointer", &ReportOptions::default());
    assert!(silent.is_empty());

    let options = ReportOptions {
        report_info: true,
        ..ReportOptions::default()
    };
    let verbose = validate_class_string("cursor-pointer", &options);
    assert_eq!(verbose.len(), 1);
    assert_eq!(verbose[0].kind, ViolationKind::Info);
}
