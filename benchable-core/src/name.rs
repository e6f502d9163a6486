//! Case Name Derivation
//!
//! Declared case names are free-form text; the registry stores them under a
//! normalized, prefixed identifier, and reports show a label derived back
//! from that identifier.
//!
//! The two functions are pure, total, and deterministic, but `case_label`
//! is not a true inverse of `case_identifier`: original casing and
//! punctuation are lost, and distinct names can collide on the same
//! identifier ("CPU usage" and "cpu usage" both become `case_cpu_usage`).
//! That lossiness is inherited from the declaration convention and is a
//! documented limitation, not a defect.

/// Prefix every registered case identifier carries.
pub const CASE_PREFIX: &str = "case_";

/// Derive the registry identifier for a declared case name.
///
/// `"Quick Sort"` becomes `"case_quick_sort"`. An empty name yields the
/// bare prefix; nothing rejects it.
pub fn case_identifier(name: &str) -> String {
    let mut id = String::with_capacity(CASE_PREFIX.len() + name.len());
    id.push_str(CASE_PREFIX);
    for ch in name.chars() {
        if ch == ' ' {
            id.push('_');
        } else {
            for lower in ch.to_lowercase() {
                id.push(lower);
            }
        }
    }
    id
}

/// Derive the human-readable report label for a case identifier.
///
/// Strips the `case_` prefix, turns underscores back into single spaces,
/// uppercases the first character and lowercases the rest:
/// `"case_quick_sort"` becomes `"Quick sort"`.
pub fn case_label(identifier: &str) -> String {
    let stem = identifier.strip_prefix(CASE_PREFIX).unwrap_or(identifier);
    let mut label = String::with_capacity(stem.len());
    let mut chars = stem.chars();
    if let Some(first) = chars.next() {
        for upper in first.to_uppercase() {
            label.push(upper);
        }
    }
    for ch in chars {
        if ch == '_' {
            label.push(' ');
        } else {
            for lower in ch.to_lowercase() {
                label.push(lower);
            }
        }
    }
    label
}
