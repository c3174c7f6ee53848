//! Label generators for legends and axes.
//!
//! Pure functions from dataset + key to a display string; no side effects.

use crate::data::{PieDataset, XyzDataset};
use crate::error::Result;

/// Produces the legend/section label for one pie dataset key.
pub trait PieLabelGenerator {
    /// The label for `key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the dataset has
    /// no such key.
    fn label(&self, dataset: &PieDataset, key: &str) -> Result<String>;
}

/// The standard pie label: the key itself, optionally with its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardPieLabelGenerator {
    show_value: bool,
}

impl StandardPieLabelGenerator {
    /// Labels are the bare key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels are `key (value)`.
    #[must_use]
    pub fn with_values() -> Self {
        Self { show_value: true }
    }
}

impl PieLabelGenerator for StandardPieLabelGenerator {
    fn label(&self, dataset: &PieDataset, key: &str) -> Result<String> {
        let value = dataset.value(key)?;
        if self.show_value {
            Ok(format!("{key} ({value})"))
        } else {
            Ok(key.to_string())
        }
    }
}

/// Produces the legend label for one series of an XYZ dataset.
pub trait SeriesLabelGenerator {
    /// The label for `series_key`.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`](crate::Error::KeyNotFound) if the dataset has
    /// no such series.
    fn label(&self, dataset: &dyn XyzDataset, series_key: &str) -> Result<String>;
}

/// The standard series label: the series key itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSeriesLabelGenerator;

impl StandardSeriesLabelGenerator {
    /// Create the generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SeriesLabelGenerator for StandardSeriesLabelGenerator {
    fn label(&self, dataset: &dyn XyzDataset, series_key: &str) -> Result<String> {
        dataset.series_index(series_key)?;
        Ok(series_key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{XyzSeries, XyzSeriesCollection};
    use crate::error::Error;

    #[test]
    fn test_pie_label_plain_and_with_value() {
        let mut d = PieDataset::new();
        d.insert("Kotlin", 62.5);

        let plain = StandardPieLabelGenerator::new();
        assert_eq!(plain.label(&d, "Kotlin").unwrap(), "Kotlin");

        let valued = StandardPieLabelGenerator::with_values();
        assert_eq!(valued.label(&d, "Kotlin").unwrap(), "Kotlin (62.5)");
    }

    #[test]
    fn test_pie_label_unknown_key_fails() {
        let d = PieDataset::new();
        let generator = StandardPieLabelGenerator::new();
        assert!(matches!(
            generator.label(&d, "missing"),
            Err(Error::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_series_label() {
        let mut d = XyzSeriesCollection::new();
        d.add(XyzSeries::new("S1")).unwrap();

        let generator = StandardSeriesLabelGenerator::new();
        assert_eq!(generator.label(&d, "S1").unwrap(), "S1");
        assert!(matches!(
            generator.label(&d, "S2"),
            Err(Error::KeyNotFound { .. })
        ));
    }
}
