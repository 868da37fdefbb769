//! # classwise
//!
//! A rule-based compatibility checker for utility CSS classes (Tailwind-style
//! tokens) and inline style declarations, targeting a constrained embedded
//! HTML/CSS rendering engine.
//!
//! ## Features
//!
//! - Decompose a utility class into canonical CSS property/value pairs
//! - Evaluate pattern, exact, property, and combination rules in a fixed
//!   precedence order to produce a supported/unsupported verdict
//! - Batch-validate whole class strings with a reporting policy for lint hosts
//! - Inline-style declaration checks (GIF URLs, legacy units)
//!
//! ## Quick Start
//!
//! ```
//! use classwise::{class_property, class_support, validate_class_string, ReportOptions};
//!
//! // Map a class to its CSS declaration
//! let mapping = class_property("mt-4").unwrap();
//! assert_eq!(mapping.as_slice()[0].property, "margin-top");
//!
//! // Ask whether the engine supports it
//! let verdict = class_support("shadow-lg");
//! assert!(!verdict.supported);
//!
//! // Lint a whole class string
//! let violations = validate_class_string("flex p-4 shadow-lg grid", &ReportOptions::default());
//! assert_eq!(violations.len(), 2);
//! ```
//!
//! ## Verdicts, not errors
//!
//! Every validation outcome is returned as [`Verdict`] data; no input can
//! make the checker panic or return an `Err`. The [`error::Error`] type only
//! covers the host-facing CLI surface.

pub mod error;
pub mod inline;
pub mod map;
pub mod rules;
pub mod tables;
pub mod types;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use map::{class_property, split_classes};
pub use types::{
    Mapping, PropertyMapping, REASON_INVALID_CLASS, REASON_UNKNOWN_CLASS, Verdict, Violation,
    ViolationKind,
};
pub use validate::{
    ReportOptions, class_support, class_support_with, should_report, validate_class_string,
};
