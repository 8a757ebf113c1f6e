//! Battery and solar sizing for off-grid electric cooking appliances.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
/// Input control ranges.
pub mod controls;
pub mod io;
pub mod logging;
/// Text report and chart model.
pub mod report;
/// Sizing calculator and its value types.
pub mod sizing;
#[cfg(feature = "tui")]
pub mod tui;
