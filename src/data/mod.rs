//! Dataset abstractions and in-memory series storage.
//!
//! Datasets give renderers read-only access to multi-series numeric data.
//! Series and item indices are stable and follow insertion order; keys are
//! unique within one dataset.

mod category;
mod pie;
mod xyz;

pub use category::CategoryDataset;
pub use pie::PieDataset;
pub use xyz::{XyzItem, XyzSeries, XyzSeriesCollection};

use crate::error::Result;

/// Read-only access to a dataset of (x, y, z) series.
///
/// Implementations own their series storage; all methods here are pure
/// reads. Mutation goes through the concrete collection type.
pub trait XyzDataset {
    /// Number of series in the dataset.
    fn series_count(&self) -> usize;

    /// The series keys in insertion order.
    ///
    /// Returns a defensive copy: mutating the result never affects the
    /// dataset.
    fn series_keys(&self) -> Vec<String>;

    /// The insertion-order position of `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if no series has
    /// this key.
    fn series_index(&self, key: &str) -> Result<usize>;

    /// Number of items in the series at `series`.
    ///
    /// # Errors
    ///
    /// [`Error::SeriesIndexOutOfBounds`](crate::Error::SeriesIndexOutOfBounds)
    /// if `series` is not a valid index.
    fn item_count(&self, series: usize) -> Result<usize>;

    /// The x value of one item.
    ///
    /// # Errors
    ///
    /// Out-of-bounds series or item index.
    fn x(&self, series: usize, item: usize) -> Result<f64>;

    /// The y value of one item.
    ///
    /// # Errors
    ///
    /// Out-of-bounds series or item index.
    fn y(&self, series: usize, item: usize) -> Result<f64>;

    /// The z value of one item.
    ///
    /// # Errors
    ///
    /// Out-of-bounds series or item index.
    fn z(&self, series: usize, item: usize) -> Result<f64>;
}
