//! Declarative column schema for trajectory file variants
//!
//! The token positions selected from each data line are a fixed contract
//! with HYSPLIT's endpoint writer. Keeping both index lists here, as data,
//! makes them auditable and testable independently of the extraction loop.

use crate::constants::{EXTENDED_COLUMN_NAMES, STANDARD_COLUMN_NAMES};

/// Source-token positions for the standard variant: year, month, day, hour,
/// hours along trajectory, lat, lon, height, pressure.
const STANDARD_TOKEN_INDICES: &[usize] = &[2, 3, 4, 5, 8, 9, 10, 11, 12];

/// Source-token positions for the extended meteorology variant; the first
/// nine match the standard variant, followed by the nine diagnostic fields.
const EXTENDED_TOKEN_INDICES: &[usize] = &[
    2, 3, 4, 5, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21,
];

/// Trajectory file variant, decided once per file during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryVariant {
    /// Nine output columns: position, time, and pressure.
    Standard,
    /// Eighteen output columns: standard plus extended meteorology
    /// diagnostics (theta, air temperature, rainfall, ...).
    Extended,
}

impl TrajectoryVariant {
    /// Ordered source-token positions to extract from each data line.
    pub fn token_indices(&self) -> &'static [usize] {
        match self {
            Self::Standard => STANDARD_TOKEN_INDICES,
            Self::Extended => EXTENDED_TOKEN_INDICES,
        }
    }

    /// Output column count for this variant.
    pub fn column_count(&self) -> usize {
        self.token_indices().len()
    }

    /// Output column names for this variant.
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => STANDARD_COLUMN_NAMES,
            Self::Extended => EXTENDED_COLUMN_NAMES,
        }
    }
}

impl std::fmt::Display for TrajectoryVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Extended => write!(f, "extended"),
        }
    }
}
