//! Application constants for the HYSPLIT reader
//!
//! This module contains the file format markers, token count requirements,
//! and column naming used throughout the reader. The marker strings and
//! token positions are part of the wire format agreement with HYSPLIT's
//! output writers and must not be changed without a format-version check.

// =============================================================================
// Trajectory File Format Markers
// =============================================================================

/// Substring marking the trajectory header line; data rows follow the last
/// line containing it.
pub const TRAJECTORY_HEADER_MARKER: &str = "PRESSURE";

/// Substring whose presence anywhere in the file indicates the extended
/// meteorology variant (18 output columns instead of 9).
pub const EXTENDED_MET_MARKER: &str = "AIR_TEMP";

/// Minimum whitespace-separated tokens for a trajectory data line to be
/// considered a row at all. Lines below this are dropped silently.
pub const MIN_TRAJECTORY_TOKENS: usize = 13;

/// Minimum tokens for a particle dump line: id, lat, lon, height.
pub const MIN_PARDUMP_TOKENS: usize = 4;

// =============================================================================
// Column Schemas
// =============================================================================

/// Output column names for the standard trajectory variant (9 columns).
pub const STANDARD_COLUMN_NAMES: &[&str] = &[
    "year",
    "month",
    "day",
    "hour",
    "hour_along",
    "lat",
    "lon",
    "height",
    "pressure",
];

/// Output column names for the extended meteorology variant (18 columns).
pub const EXTENDED_COLUMN_NAMES: &[&str] = &[
    "year",
    "month",
    "day",
    "hour",
    "hour_along",
    "lat",
    "lon",
    "height",
    "pressure",
    "theta",
    "air_temp",
    "rainfall",
    "mixdepth",
    "rh",
    "sp_humidity",
    "h2o_mixrate",
    "terr_msl",
    "sun_flux",
];

/// Output column names for particle dump tables.
pub const PARDUMP_COLUMN_NAMES: &[&str] = &["particle_id", "lat", "lon", "height"];

// =============================================================================
// File Discovery Patterns
// =============================================================================

/// Glob pattern for trajectory output files within a run directory.
pub const TRAJECTORY_FILE_PATTERN: &str = "traj-*";

/// Conventional file name for particle dumps within a run directory.
pub const PARDUMP_FILE_NAME: &str = "PARDUMP";

// =============================================================================
// Datetime Post-Processing
// =============================================================================

/// Two-digit years below this pivot are interpreted as 20xx, others as 19xx.
pub const YEAR_PIVOT: i64 = 50;
