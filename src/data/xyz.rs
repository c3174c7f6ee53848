//! XYZ series storage.

use crate::data::XyzDataset;
use crate::error::{Error, Result};

/// One (x, y, z) data item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzItem {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
    /// Z value.
    pub z: f64,
}

impl XyzItem {
    /// Create a new item.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A named ordered sequence of [`XyzItem`]s.
///
/// Item indices are stable and follow append order. A series belongs to at
/// most one collection; [`XyzSeriesCollection::add`] takes it by value.
#[derive(Debug, Clone, PartialEq)]
pub struct XyzSeries {
    key: String,
    items: Vec<XyzItem>,
}

impl XyzSeries {
    /// Create an empty series with the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// The series key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append one item.
    pub fn add(&mut self, x: f64, y: f64, z: f64) {
        self.items.push(XyzItem::new(x, y, z));
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item at `index`, if in bounds.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&XyzItem> {
        self.items.get(index)
    }
}

/// In-memory [`XyzDataset`] holding one or more uniquely-keyed series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzSeriesCollection {
    series: Vec<XyzSeries>,
}

impl XyzSeriesCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a series, taking ownership of it.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a series with the same key already exists;
    /// the collection is left unmodified.
    pub fn add(&mut self, series: XyzSeries) -> Result<()> {
        if self.series.iter().any(|s| s.key() == series.key()) {
            return Err(Error::DuplicateKey {
                key: series.key().to_string(),
            });
        }
        self.series.push(series);
        Ok(())
    }

    /// The series at `index`, if in bounds.
    #[must_use]
    pub fn series(&self, index: usize) -> Option<&XyzSeries> {
        self.series.get(index)
    }

    fn item(&self, series: usize, item: usize) -> Result<&XyzItem> {
        let s = self
            .series
            .get(series)
            .ok_or(Error::SeriesIndexOutOfBounds {
                index: series,
                count: self.series.len(),
            })?;
        s.item(item).ok_or(Error::ItemIndexOutOfBounds {
            series,
            index: item,
            count: s.item_count(),
        })
    }
}

impl XyzDataset for XyzSeriesCollection {
    fn series_count(&self) -> usize {
        self.series.len()
    }

    fn series_keys(&self) -> Vec<String> {
        self.series.iter().map(|s| s.key().to_string()).collect()
    }

    fn series_index(&self, key: &str) -> Result<usize> {
        self.series
            .iter()
            .position(|s| s.key() == key)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    fn item_count(&self, series: usize) -> Result<usize> {
        self.series
            .get(series)
            .map(XyzSeries::item_count)
            .ok_or(Error::SeriesIndexOutOfBounds {
                index: series,
                count: self.series.len(),
            })
    }

    fn x(&self, series: usize, item: usize) -> Result<f64> {
        self.item(series, item).map(|it| it.x)
    }

    fn y(&self, series: usize, item: usize) -> Result<f64> {
        self.item(series, item).map(|it| it.y)
    }

    fn z(&self, series: usize, item: usize) -> Result<f64> {
        self.item(series, item).map(|it| it.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_collection() -> XyzSeriesCollection {
        let mut a = XyzSeries::new("A");
        a.add(0.0, 0.0, 0.0);
        a.add(1.0, 2.0, 3.0);
        let mut b = XyzSeries::new("B");
        b.add(-1.0, 5.0, 2.0);

        let mut collection = XyzSeriesCollection::new();
        collection.add(a).unwrap();
        collection.add(b).unwrap();
        collection
    }

    #[test]
    fn test_counts_and_accessors() {
        let c = sample_collection();
        assert_eq!(c.series_count(), 2);
        assert_eq!(c.item_count(0).unwrap(), 2);
        assert_eq!(c.item_count(1).unwrap(), 1);
        assert_eq!(c.x(0, 1).unwrap(), 1.0);
        assert_eq!(c.y(1, 0).unwrap(), 5.0);
        assert_eq!(c.z(0, 1).unwrap(), 3.0);
    }

    #[test]
    fn test_series_keys_is_defensive_copy() {
        let c = sample_collection();
        let mut keys = c.series_keys();
        keys.clear();
        assert_eq!(c.series_keys(), vec!["A", "B"]);
    }

    #[test]
    fn test_series_index_matches_key_order() {
        let c = sample_collection();
        for (i, key) in c.series_keys().iter().enumerate() {
            assert_eq!(c.series_index(key).unwrap(), i);
        }
    }

    #[test]
    fn test_series_index_unknown_key() {
        let c = sample_collection();
        assert_eq!(
            c.series_index("missing"),
            Err(Error::KeyNotFound {
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_key_rejected_without_mutation() {
        let mut c = sample_collection();
        let result = c.add(XyzSeries::new("A"));
        assert_eq!(
            result,
            Err(Error::DuplicateKey {
                key: "A".to_string()
            })
        );
        assert_eq!(c.series_count(), 2);
    }

    #[test]
    fn test_out_of_bounds_indices() {
        let c = sample_collection();
        assert!(matches!(
            c.item_count(2),
            Err(Error::SeriesIndexOutOfBounds { index: 2, count: 2 })
        ));
        assert!(matches!(
            c.x(0, 5),
            Err(Error::ItemIndexOutOfBounds {
                series: 0,
                index: 5,
                count: 2
            })
        ));
    }

    proptest! {
        #[test]
        fn prop_series_index_roundtrip(keys in proptest::collection::hash_set("[a-z]{1,8}", 1..8)) {
            let mut collection = XyzSeriesCollection::new();
            let keys: Vec<String> = keys.into_iter().collect();
            for key in &keys {
                collection.add(XyzSeries::new(key.clone())).unwrap();
            }
            for (i, key) in collection.series_keys().iter().enumerate() {
                prop_assert_eq!(collection.series_index(key).unwrap(), i);
            }
            prop_assert_eq!(collection.series_count(), keys.len());
        }
    }
}
