//! Core data model: property mappings, verdicts, and violations.
//!
//! Everything here is short-lived plain data produced fresh per validation
//! call. Nothing is cached or mutated across calls.

/// Reason sentinel for input that is not a usable class token (empty/blank).
pub const REASON_INVALID_CLASS: &str = "invalid_class";

/// Reason sentinel for tokens no mapper or rule recognizes.
pub const REASON_UNKNOWN_CLASS: &str = "unknown_class";

/// Message id attached to unsupported-class violations, consumed by lint hosts.
pub const MESSAGE_ID_CLASS: &str = "unsupportedClass";

/// Message id attached to advisory (info) violations.
pub const MESSAGE_ID_INFO: &str = "classNote";

/// A canonical CSS property name with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "cli", feature = "wasm"),
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct PropertyMapping {
    pub property: String,
    pub value: String,
}

impl PropertyMapping {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        PropertyMapping {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Result of mapping one utility class: a single declaration or a
/// multi-property expansion (axis shorthands like `mx-4`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "cli", feature = "wasm"),
    derive(serde::Serialize),
    serde(untagged)
)]
pub enum Mapping {
    Single(PropertyMapping),
    Multi(Vec<PropertyMapping>),
}

impl Mapping {
    pub fn single(property: impl Into<String>, value: impl Into<String>) -> Self {
        Mapping::Single(PropertyMapping::new(property, value))
    }

    /// All mappings as a slice, regardless of arity.
    pub fn as_slice(&self) -> &[PropertyMapping] {
        match self {
            Mapping::Single(m) => std::slice::from_ref(m),
            Mapping::Multi(ms) => ms,
        }
    }
}

/// The outcome of validating one class or declaration.
///
/// `reason` is present on every unsupported verdict. `note` is an advisory
/// message that may accompany a *supported* verdict (e.g. cursor classes
/// needing a native implementation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(any(feature = "cli", feature = "wasm"), derive(serde::Serialize))]
pub struct Verdict {
    pub supported: bool,
    #[cfg_attr(
        any(feature = "cli", feature = "wasm"),
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub reason: Option<String>,
    #[cfg_attr(
        any(feature = "cli", feature = "wasm"),
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub note: Option<String>,
}

impl Verdict {
    pub fn ok() -> Self {
        Verdict {
            supported: true,
            reason: None,
            note: None,
        }
    }

    pub fn ok_with_note(note: impl Into<String>) -> Self {
        Verdict {
            supported: true,
            reason: None,
            note: Some(note.into()),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Verdict {
            supported: false,
            reason: Some(reason.into()),
            note: None,
        }
    }

    pub fn fail_with_note(reason: impl Into<String>, note: impl Into<String>) -> Self {
        Verdict {
            supported: false,
            reason: Some(reason.into()),
            note: Some(note.into()),
        }
    }
}

/// Whether a violation flags an unsupported class or carries advisory info.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "cli", feature = "wasm"),
    derive(serde::Serialize),
    serde(rename_all = "lowercase")
)]
pub enum ViolationKind {
    Class,
    Info,
}

/// One reportable finding for a class token in a batch validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    any(feature = "cli", feature = "wasm"),
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct Violation {
    pub class_name: String,
    #[cfg_attr(any(feature = "cli", feature = "wasm"), serde(rename = "type"))]
    pub kind: ViolationKind,
    pub reason: String,
    #[cfg_attr(
        any(feature = "cli", feature = "wasm"),
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub note: Option<String>,
    pub message_id: &'static str,
}

impl Violation {
    /// An unsupported-class violation.
    pub fn class(class_name: impl Into<String>, reason: impl Into<String>, note: Option<String>) -> Self {
        Violation {
            class_name: class_name.into(),
            kind: ViolationKind::Class,
            reason: reason.into(),
            note,
            message_id: MESSAGE_ID_CLASS,
        }
    }

    /// An advisory violation for a supported class carrying a note.
    pub fn info(class_name: impl Into<String>, note: impl Into<String>) -> Self {
        Violation {
            class_name: class_name.into(),
            kind: ViolationKind::Info,
            reason: note.into(),
            note: None,
            message_id: MESSAGE_ID_INFO,
        }
    }
}
