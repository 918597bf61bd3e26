//! Display formatting and defaulting policy.
//!
//! Three policies cover every optional field in the export:
//!
//! - [`or_na`]: absent renders as `"N/A"` (team count, waiver clear time);
//! - [`or_zero`]: absent counts as zero (substitutions, FAAB amounts);
//! - [`undef`]: absent renders as the literal `undefined` placeholder.
//!
//! The `undefined` pass-through mirrors the upstream export pipeline and is
//! load-bearing for output stability; do not add defaults here without
//! product confirmation.

use std::fmt::Display;

/// Render an optional value, defaulting to `"N/A"`.
pub fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Treat an absent count as zero.
pub fn or_zero(value: Option<i64>) -> i64 {
    value.unwrap_or(0)
}

/// Render an optional value, passing absence through as `undefined`.
pub fn undef<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "undefined".to_string(), |v| v.to_string())
}

/// Render a point value in shortest form (`4`, `0.04`, `-2`).
pub fn points_display(value: f64) -> String {
    value.to_string()
}

/// An absent flag counts as unset.
pub fn is_set(flag: Option<bool>) -> bool {
    flag.unwrap_or(false)
}

/// Map a waiver mode code to its display label.
///
/// Unknown codes render as `code:<n>` instead of failing, so a new mode on
/// the platform side degrades to a visible-but-ugly label rather than
/// breaking the transform. An absent code passes through as
/// `code:undefined`.
pub fn waiver_type_label(code: Option<i64>) -> String {
    match code {
        Some(0) => "None".to_string(),
        Some(1) => "Waivers".to_string(),
        Some(2) => "FAAB".to_string(),
        Some(n) => format!("code:{n}"),
        None => "code:undefined".to_string(),
    }
}

/// Join roster position codes with the site's middle-dot separator.
pub fn join_positions(positions: &[String]) -> String {
    positions.join(" · ")
}

/// Count bench slots by exact equality against the bench code `"BN"`.
///
/// Any other bench-labeling convention is not recognized and yields zero.
pub fn bench_slots(positions: &[String]) -> usize {
    positions.iter().filter(|p| p.as_str() == "BN").count()
}
