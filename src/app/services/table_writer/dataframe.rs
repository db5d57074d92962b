//! Table to DataFrame conversion and trajectory post-processing

use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use tracing::debug;

use crate::app::models::Table;
use crate::app::services::trajectory_parser::TrajectoryVariant;
use crate::constants::{PARDUMP_COLUMN_NAMES, YEAR_PIVOT};
use crate::{Error, Result};

/// Convert a table to a DataFrame with the given column names.
///
/// A 0x0 table converts to an empty frame. The name list length must match
/// the table width.
pub fn table_to_dataframe(table: &Table, names: &[&str]) -> Result<DataFrame> {
    if table.columns() == 0 {
        return Ok(DataFrame::empty());
    }
    if names.len() != table.columns() {
        return Err(Error::table_export(format!(
            "Expected {} column names, got {}",
            table.columns(),
            names.len()
        )));
    }

    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            // Index is in range by the width check above.
            let values = table.column(idx).unwrap_or_default();
            Column::new((*name).into(), values)
        })
        .collect();

    Ok(DataFrame::new(columns)?)
}

/// Convert a particle dump table to a named DataFrame.
pub fn pardump_dataframe(table: &Table) -> Result<DataFrame> {
    table_to_dataframe(table, PARDUMP_COLUMN_NAMES)
}

/// Convert a trajectory table to a named DataFrame.
///
/// With `enrich` set, the two-digit model year is expanded against the
/// century pivot, the time component columns are cast to integers, and two
/// datetime columns are derived: `traj_dt` from each row's
/// year/month/day/hour (invalid dates mapped to null) and `traj_dt_i`, the
/// first row's `traj_dt` broadcast to every row as the trajectory's
/// initial datetime.
pub fn trajectory_dataframe(
    table: &Table,
    variant: TrajectoryVariant,
    enrich: bool,
) -> Result<DataFrame> {
    if table.columns() == 0 {
        return Ok(DataFrame::empty());
    }
    if table.columns() != variant.column_count() {
        return Err(Error::table_export(format!(
            "Table has {} columns but {} variant declares {}",
            table.columns(),
            variant,
            variant.column_count()
        )));
    }

    if !enrich {
        return table_to_dataframe(table, variant.column_names());
    }

    let names = variant.column_names();
    let rows = table.rows();

    // Expanded time components, in file order.
    let mut years = Vec::with_capacity(rows);
    let mut months = Vec::with_capacity(rows);
    let mut days = Vec::with_capacity(rows);
    let mut hours = Vec::with_capacity(rows);
    let mut hours_along = Vec::with_capacity(rows);
    let mut datetimes: Vec<Option<NaiveDateTime>> = Vec::with_capacity(rows);

    for row in table.iter_rows() {
        let raw_year = row[0] as i64;
        let year = if raw_year < YEAR_PIVOT {
            raw_year + 2000
        } else {
            raw_year + 1900
        } as i32;
        let month = row[1] as i32;
        let day = row[2] as i32;
        let hour = row[3] as i32;

        years.push(year);
        months.push(month);
        days.push(day);
        hours.push(hour);
        hours_along.push(row[4] as i32);

        let dt = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .and_then(|date| date.and_hms_opt(hour as u32, 0, 0));
        if dt.is_none() {
            debug!("Invalid date components {}-{}-{} {}h", year, month, day, hour);
        }
        datetimes.push(dt);
    }

    let mut columns: Vec<Column> = vec![
        Column::new("year".into(), years),
        Column::new("month".into(), months),
        Column::new("day".into(), days),
        Column::new("hour".into(), hours),
        Column::new("hour_along".into(), hours_along),
    ];

    // Remaining columns stay as parsed floats.
    for (idx, name) in names.iter().enumerate().skip(5) {
        let values = table.column(idx).unwrap_or_default();
        columns.push(Column::new((*name).into(), values));
    }

    // Initial datetime: null when there are no rows or the first row's
    // date components do not form a date.
    let initial_dt = datetimes.first().copied().flatten();
    columns.push(Column::new("traj_dt".into(), datetimes));
    columns.push(Column::new("traj_dt_i".into(), vec![initial_dt; rows]));

    Ok(DataFrame::new(columns)?)
}
