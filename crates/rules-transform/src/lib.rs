//! Load / project / write pipeline for the league rules document.
//!
//! Strictly `load -> project -> write`: read a Sleeper league export, build
//! the seven fixed display sections, replace the output document. Stateless
//! and idempotent given the same input and snapshot date.

pub mod format;
pub mod io;
pub mod project;

pub use format::{
    bench_slots, is_set, join_positions, or_na, or_zero, points_display, undef, waiver_type_label,
};
pub use io::{load, write};
pub use project::project;
