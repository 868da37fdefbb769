//! WASM bindings for JavaScript lint hosts.
//!
//! This module exposes the mapper and validation entry points to JavaScript
//! via wasm-bindgen. Results cross the boundary as JSON strings so the host
//! sees the same shapes its reporting layer already consumes.

use wasm_bindgen::prelude::*;

use crate::validate::ReportOptions;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Resolve a class to its CSS property mapping(s).
///
/// Returns a JSON object, a JSON array for multi-property classes, or the
/// string `null` when nothing recognizes the token.
#[wasm_bindgen]
pub fn class_property(class: &str) -> String {
    let mapping = crate::map::class_property(class);
    serde_json::to_string(&mapping).unwrap_or_else(|_| "null".to_string())
}

/// Ask whether the engine supports a class.
///
/// Returns a JSON verdict: `{"supported": bool, "reason"?, "note"?}`.
#[wasm_bindgen]
pub fn class_support(class: &str) -> String {
    let verdict = crate::validate::class_support(class);
    serde_json::to_string(&verdict).unwrap_or_else(|_| "{\"supported\":false}".to_string())
}

/// Validate a whole class string under a reporting policy.
///
/// Returns a JSON array of violations in source order.
#[wasm_bindgen]
pub fn validate_class_string(classes: &str, report_info: bool, ignore_unknown: bool) -> String {
    let options = ReportOptions {
        ignore_unknown,
        report_info,
        severity: None,
        ignore_classes: Vec::new(),
    };
    let violations = crate::validate::validate_class_string(classes, &options);
    serde_json::to_string(&violations).unwrap_or_else(|_| "[]".to_string())
}
