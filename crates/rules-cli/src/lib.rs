//! CLI library components for the league rules transpiler.

pub mod logging;
pub mod pipeline;
