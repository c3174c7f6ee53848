//! Pie dataset: an ordered key/value store.

use crate::error::{Error, Result};

/// Ordered key -> value data for pie charts.
///
/// Keys are unique; inserting under an existing key replaces its value in
/// place, so entry indices stay stable in first-insert order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieDataset {
    entries: Vec<(String, f64)>,
}

impl PieDataset {
    /// Create an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// The keys in first-insert order, as a defensive copy.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// The key at `index`, if in bounds.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    /// The value at `index`, if in bounds.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|(_, v)| *v)
    }

    /// The value stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn value(&self, key: &str) -> Result<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Sum of all finite entry values.
    ///
    /// Non-finite values are excluded, matching the range-computation policy,
    /// so wedge angle shares stay well-defined.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, v)| *v)
            .filter(|v| v.is_finite())
            .sum()
    }
}
