//! Test fixtures for table export
//!
//! Shared helpers for building small in-memory tables matching the shapes
//! the parsers produce.

use crate::app::models::Table;


/// Build a standard-variant table with two rows of plausible endpoint data.
pub fn standard_table() -> Table {
    let mut table = Table::new(9);
    // year month day hour hour_along lat lon height pressure
    table.push_row(&[95.0, 1.0, 1.0, 0.0, 0.0, 40.0, -90.0, 10.0, 975.0]);
    table.push_row(&[95.0, 1.0, 1.0, 1.0, 1.0, 40.1, -90.1, 25.0, 970.0]);
    table
}

/// Build a four-column particle table with two rows.
pub fn particle_table() -> Table {
    let mut table = Table::new(4);
    table.push_row(&[1.0, 10.0, 20.0, 5.0]);
    table.push_row(&[2.0, 10.5, 20.5, 7.5]);
    table
}
