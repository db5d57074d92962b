//! Two-pass parser for HYSPLIT trajectory endpoint files
//!
//! Trajectory files carry free-form run metadata followed by a header line
//! and fixed-layout data rows. The variant (standard vs extended
//! meteorology) governs the row width and can only be decided after seeing
//! the whole file, so parsing is two explicit stages: classification over
//! all lines, then extraction of the lines after the header.

mod classify;
mod parser;
mod schema;
mod stats;

#[cfg(test)]
mod tests;

pub use classify::{classify_lines, Classification};
pub use parser::TrajectoryParser;
pub use schema::TrajectoryVariant;
pub use stats::{ParseResult, ParseStats};
