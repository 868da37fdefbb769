//! Grid classes: template columns/rows, spans, placement, auto-flow, and gap.
//!
//! These all resolve to documentation mappings; the rule layer rejects the
//! whole grid family for the target engine.

use super::{is_integer, scale_value};
use crate::types::Mapping;

const EXACT: &[(&str, (&str, &str))] = &[
    ("grid-cols-none", ("grid-template-columns", "none")),
    ("grid-rows-none", ("grid-template-rows", "none")),
    ("grid-flow-row", ("grid-auto-flow", "row")),
    ("grid-flow-col", ("grid-auto-flow", "column")),
    ("grid-flow-row-dense", ("grid-auto-flow", "row dense")),
    ("grid-flow-col-dense", ("grid-auto-flow", "column dense")),
    ("col-auto", ("grid-column", "auto")),
    ("row-auto", ("grid-row", "auto")),
    ("col-span-full", ("grid-column", "1 / -1")),
    ("row-span-full", ("grid-row", "1 / -1")),
    ("auto-cols-auto", ("grid-auto-columns", "auto")),
    ("auto-cols-min", ("grid-auto-columns", "min-content")),
    ("auto-cols-max", ("grid-auto-columns", "max-content")),
    ("auto-cols-fr", ("grid-auto-columns", "minmax(0, 1fr)")),
    ("auto-rows-auto", ("grid-auto-rows", "auto")),
    ("auto-rows-min", ("grid-auto-rows", "min-content")),
    ("auto-rows-max", ("grid-auto-rows", "max-content")),
    ("auto-rows-fr", ("grid-auto-rows", "minmax(0, 1fr)")),
];

const NUMERIC: &[(&str, &str, NumericForm)] = &[
    ("grid-cols-", "grid-template-columns", NumericForm::Repeat),
    ("grid-rows-", "grid-template-rows", NumericForm::Repeat),
    ("col-span-", "grid-column", NumericForm::Span),
    ("row-span-", "grid-row", NumericForm::Span),
    ("col-start-", "grid-column-start", NumericForm::Plain),
    ("col-end-", "grid-column-end", NumericForm::Plain),
    ("row-start-", "grid-row-start", NumericForm::Plain),
    ("row-end-", "grid-row-end", NumericForm::Plain),
];

#[derive(Clone, Copy)]
enum NumericForm {
    Repeat,
    Span,
    Plain,
}

pub fn map(class: &str) -> Option<Mapping> {
    if let Some((property, value)) = EXACT.iter().find(|(k, _)| *k == class).map(|(_, pv)| *pv) {
        return Some(Mapping::single(property, value));
    }

    for (prefix, property, form) in NUMERIC {
        if let Some(n) = class.strip_prefix(prefix)
            && is_integer(n)
        {
            let value = match form {
                NumericForm::Repeat => format!("repeat({n}, minmax(0, 1fr))"),
                NumericForm::Span => format!("span {n} / span {n}"),
                NumericForm::Plain => n.to_string(),
            };
            return Some(Mapping::single(*property, value));
        }
    }

    if let Some(key) = class.strip_prefix("gap-x-")
        && let Some(value) = scale_value(key)
    {
        return Some(Mapping::single("column-gap", value));
    }
    if let Some(key) = class.strip_prefix("gap-y-")
        && let Some(value) = scale_value(key)
    {
        return Some(Mapping::single("row-gap", value));
    }
    if let Some(key) = class.strip_prefix("gap-")
        && let Some(value) = scale_value(key)
    {
        return Some(Mapping::single("gap", value));
    }

    None
}
