//! Data models for HYSPLIT file processing
//!
//! This module contains the dense numeric table produced by the parsers.
//! The table is deliberately minimal: a row-major `f64` matrix with a column
//! count fixed at construction, matching the downstream expectation of a
//! homogeneous 2-D array.

/// Row-major numeric table with a fixed column count.
///
/// A table may declare a nonzero column count while holding zero rows, which
/// is how "valid header found, no qualifying data" is represented. Malformed
/// input rows are never stored; they are skipped by the parsers before a row
/// reaches the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: usize,
    values: Vec<f64>,
}

impl Table {
    /// Create an empty table with the given column count.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            values: Vec::new(),
        }
    }

    /// Create an empty table, reserving capacity for an estimated row count.
    pub fn with_row_capacity(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            values: Vec::with_capacity(columns * rows),
        }
    }

    /// Declared column count; fixed for the table's lifetime.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of complete rows currently stored.
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.values.len() / self.columns
        }
    }

    /// Table shape as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns)
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a complete row. The slice length must equal the declared
    /// column count; the parsers guarantee this before calling.
    pub fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.columns);
        self.values.extend_from_slice(row);
    }

    /// Borrow row `index`, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if self.columns == 0 || index >= self.rows() {
            return None;
        }
        let start = index * self.columns;
        Some(&self.values[start..start + self.columns])
    }

    /// Iterate over rows in file order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.columns.max(1))
    }

    /// Copy out a single column by index, in row order.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.columns {
            return None;
        }
        Some(
            self.values
                .iter()
                .skip(index)
                .step_by(self.columns)
                .copied()
                .collect(),
        )
    }

    /// Append all rows of `other`. Both tables must declare the same column
    /// count; the caller maps a mismatch to a schema error with file context.
    pub fn append(&mut self, other: &Table) -> std::result::Result<(), usize> {
        if other.columns != self.columns {
            return Err(other.columns);
        }
        self.values.extend_from_slice(&other.values);
        Ok(())
    }

    /// Flat row-major view of the underlying values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_with_declared_columns() {
        let table = Table::new(9);
        assert_eq!(table.shape(), (0, 9));
        assert!(table.is_empty());
        assert_eq!(table.row(0), None);
    }

    #[test]
    fn test_push_and_read_rows() {
        let mut table = Table::new(3);
        table.push_row(&[1.0, 2.0, 3.0]);
        table.push_row(&[4.0, 5.0, 6.0]);

        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.row(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(table.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn test_column_extraction() {
        let mut table = Table::new(2);
        table.push_row(&[1.0, 10.0]);
        table.push_row(&[2.0, 20.0]);
        table.push_row(&[3.0, 30.0]);

        assert_eq!(table.column(0), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(table.column(1), Some(vec![10.0, 20.0, 30.0]));
        assert_eq!(table.column(2), None);
    }

    #[test]
    fn test_append_matching_widths() {
        let mut a = Table::new(2);
        a.push_row(&[1.0, 2.0]);
        let mut b = Table::new(2);
        b.push_row(&[3.0, 4.0]);

        a.append(&b).unwrap();
        assert_eq!(a.rows(), 2);
        assert_eq!(a.row(1), Some(&[3.0, 4.0][..]));
    }

    #[test]
    fn test_append_mismatched_widths_rejected() {
        let mut a = Table::new(9);
        let b = Table::new(18);
        assert_eq!(a.append(&b), Err(18));
        assert_eq!(a.rows(), 0);
    }

    #[test]
    fn test_zero_column_table() {
        let table = Table::new(0);
        assert_eq!(table.shape(), (0, 0));
        assert_eq!(table.column(0), None);
    }
}
