//! Exact-class rules and special class+property combination rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Reason, reason, verdict};
use crate::types::Verdict;

struct ExactRule {
    supported: bool,
    reason: Option<Reason>,
    note: Option<&'static str>,
}

static EXACT_RULES: Lazy<HashMap<&'static str, ExactRule>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    let mut deny = |class: &'static str, why: &'static str| {
        rules.insert(
            class,
            ExactRule {
                supported: false,
                reason: Some(Reason::Text(why)),
                note: None,
            },
        );
    };
    deny("box-content", reason::BOX_CONTENT);
    // also covered by the appearance pattern rule, which runs first
    deny("appearance-none", reason::APPEARANCE);
    deny("sr-only", reason::SR_ONLY);
    deny("not-sr-only", reason::SR_ONLY);
    deny("container", reason::CONTAINER);
    deny("isolate", reason::ISOLATION);
    deny("transition", reason::TRANSITION);
    rules.insert(
        "box-border",
        ExactRule {
            supported: true,
            reason: None,
            note: None,
        },
    );
    rules
});

/// Combination rules: an exact class name further restricted to a specific
/// resolved property. Only consulted when the mapper produced that property.
struct CombinationRule {
    class: &'static str,
    property: &'static str,
    supported: bool,
    reason: Option<Reason>,
    note: Option<&'static str>,
}

static COMBINATION_RULES: &[CombinationRule] = &[
    CombinationRule {
        class: "bg-black",
        property: "background-color",
        supported: true,
        reason: None,
        note: None,
    },
    CombinationRule {
        class: "bg-white",
        property: "background-color",
        supported: true,
        reason: None,
        note: None,
    },
    CombinationRule {
        class: "text-justify",
        property: "text-align",
        supported: false,
        reason: Some(Reason::Text(
            "Justified text layout is not implemented by the text engine",
        )),
        note: None,
    },
];

/// Single hash lookup over the exact-class table.
pub fn match_exact(class: &str) -> Option<Verdict> {
    EXACT_RULES
        .get(class)
        .map(|rule| verdict(rule.supported, rule.reason.as_ref(), rule.note, class))
}

/// Evaluate the class+property combination table.
pub fn match_combination(class: &str, property: &str) -> Option<Verdict> {
    COMBINATION_RULES
        .iter()
        .find(|rule| rule.class == class && rule.property == property)
        .map(|rule| verdict(rule.supported, rule.reason.as_ref(), rule.note, class))
}
