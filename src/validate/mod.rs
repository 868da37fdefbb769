//! Validation engine and batch validator.
//!
//! The engine evaluates the rule tables in a fixed precedence order; rules at
//! different tiers can reach opposite conclusions about the same class, so
//! the order here is load-bearing and must not be rearranged.

#[cfg(test)]
mod tests;

use crate::map::{class_property, split_classes};
use crate::rules;
use crate::types::{
    Mapping, REASON_INVALID_CLASS, REASON_UNKNOWN_CLASS, Verdict, Violation, ViolationKind,
};

/// Responsive breakpoint prefixes, rejected before any rule table runs.
const BREAKPOINTS: &[&str] = &["sm:", "md:", "lg:", "xl:", "2xl:"];

/// Reporting policy for a batch validation pass.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Drop violations whose reason is the `unknown_class` sentinel.
    pub ignore_unknown: bool,
    /// Surface advisory (info) violations.
    pub report_info: bool,
    /// Opaque severity label for the host; never interpreted here.
    pub severity: Option<String>,
    /// Class names to skip entirely.
    pub ignore_classes: Vec<String>,
}

/// Validate one class token, resolving its property mapping internally.
pub fn class_support(class: &str) -> Verdict {
    let mapping = class_property(class);
    class_support_with(class, mapping.as_ref())
}

/// Validate one class token against an already-resolved mapping.
///
/// Precedence: breakpoint prefix, pattern rules, comprehensive patterns,
/// exact rules, unknown-class fallback, combination rules, array rules
/// (multi mappings), grid rules, property rules (single mappings), default
/// supported. Blank input short-circuits to `invalid_class`.
pub fn class_support_with(class: &str, mapping: Option<&Mapping>) -> Verdict {
    let class = class.trim();
    if class.is_empty() {
        return Verdict::fail(REASON_INVALID_CLASS);
    }

    if BREAKPOINTS.iter().any(|prefix| class.starts_with(prefix)) {
        return Verdict::fail(rules::reason::MEDIA_QUERY);
    }
    if let Some(v) = rules::match_pattern(class) {
        return v;
    }
    if let Some(v) = rules::match_comprehensive(class) {
        return v;
    }
    if let Some(v) = rules::match_exact(class) {
        return v;
    }

    let Some(mapping) = mapping else {
        return Verdict::fail(REASON_UNKNOWN_CLASS);
    };

    match mapping {
        Mapping::Single(m) => {
            if let Some(v) = rules::match_combination(class, &m.property) {
                return v;
            }
            if let Some(v) = rules::match_grid(class, std::slice::from_ref(m)) {
                return v;
            }
            if let Some(v) = rules::match_property(&m.property, &m.value) {
                return v;
            }
        }
        Mapping::Multi(ms) => {
            if let Some(v) = rules::match_array(ms) {
                return v;
            }
            if let Some(v) = rules::match_grid(class, ms) {
                return v;
            }
        }
    }

    Verdict::ok()
}

/// Validate a whole class string, collecting violations in token order and
/// applying the reporting policy.
pub fn validate_class_string(classes: &str, options: &ReportOptions) -> Vec<Violation> {
    let mut violations = Vec::new();
    for token in split_classes(classes) {
        let mapping = class_property(token);
        let verdict = class_support_with(token, mapping.as_ref());
        let violation = if !verdict.supported {
            let reason = verdict
                .reason
                .unwrap_or_else(|| REASON_UNKNOWN_CLASS.to_string());
            Violation::class(token, reason, verdict.note)
        } else if let Some(note) = verdict.note {
            Violation::info(token, note)
        } else {
            continue;
        };
        if should_report(&violation, options) {
            violations.push(violation);
        }
    }
    violations
}

/// Whether a violation should be surfaced under the given policy.
///
/// Pure; advises the caller without mutating anything.
pub fn should_report(violation: &Violation, options: &ReportOptions) -> bool {
    if options
        .ignore_classes
        .iter()
        .any(|c| c == &violation.class_name)
    {
        return false;
    }
    if options.ignore_unknown && violation.reason == REASON_UNKNOWN_CLASS {
        return false;
    }
    if violation.kind == ViolationKind::Info && !options.report_info {
        return false;
    }
    true
}
