//! Category dataset: values keyed by (row, column) pairs.

use crate::error::{Error, Result};

/// A table of values addressed by row and column keys.
///
/// Row and column keys are unique and indexed in first-use order. Cells
/// without a value read as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDataset {
    rows: Vec<String>,
    columns: Vec<String>,
    // Row-major; grown on demand as keys appear.
    cells: Vec<Vec<Option<f64>>>,
}

impl CategoryDataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a (row, column) cell, creating the keys on first use.
    pub fn set_value(&mut self, row_key: impl Into<String>, column_key: impl Into<String>, value: f64) {
        let row = self.intern_row(row_key.into());
        let column = self.intern_column(column_key.into());
        self.cells[row][column] = Some(value);
    }

    /// Number of row keys.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of column keys.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row keys in first-use order, as a defensive copy.
    #[must_use]
    pub fn row_keys(&self) -> Vec<String> {
        self.rows.clone()
    }

    /// Column keys in first-use order, as a defensive copy.
    #[must_use]
    pub fn column_keys(&self) -> Vec<String> {
        self.columns.clone()
    }

    /// The first-use index of a row key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn row_index(&self, key: &str) -> Result<usize> {
        self.rows
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// The first-use index of a column key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn column_index(&self, key: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|k| k == key)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// The value at (row, column), or `None` for an empty cell.
    ///
    /// # Errors
    ///
    /// Out-of-bounds row or column index.
    pub fn value(&self, row: usize, column: usize) -> Result<Option<f64>> {
        if row >= self.rows.len() {
            return Err(Error::SeriesIndexOutOfBounds {
                index: row,
                count: self.rows.len(),
            });
        }
        if column >= self.columns.len() {
            return Err(Error::ItemIndexOutOfBounds {
                series: row,
                index: column,
                count: self.columns.len(),
            });
        }
        Ok(self.cells[row][column])
    }

    fn intern_row(&mut self, key: String) -> usize {
        if let Some(i) = self.rows.iter().position(|k| *k == key) {
            return i;
        }
        self.rows.push(key);
        self.cells.push(vec![None; self.columns.len()]);
        self.rows.len() - 1
    }

    fn intern_column(&mut self, key: String) -> usize {
        if let Some(i) = self.columns.iter().position(|k| *k == key) {
            return i;
        }
        self.columns.push(key);
        for row in &mut self.cells {
            row.push(None);
        }
        self.columns.len() - 1
    }
}
