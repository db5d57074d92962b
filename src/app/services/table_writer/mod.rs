//! Named-column export of parsed tables
//!
//! Converts the dense row-major tables into Polars DataFrames with the
//! column names downstream analysis expects, optionally enriching
//! trajectory output with expanded years and a derived datetime column,
//! then writes CSV or Snappy-compressed Parquet.

mod dataframe;
mod writer;

#[cfg(test)]
mod tests;

pub use dataframe::{pardump_dataframe, table_to_dataframe, trajectory_dataframe};
pub use writer::{write_dataframe, OutputFormat};
