//! Axis ranges and range queries over datasets.

use crate::data::XyzDataset;
use crate::error::Result;

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Create a new range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`; constructing an inverted range is a caller bug.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(min <= max, "range min must not exceed max");
        Self { min, max }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Interval length; zero for a degenerate range.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The smallest range covering both `self` and `other`.
    #[must_use]
    pub fn combine(&self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }
}

/// Minimal closed interval covering all finite x values, or `None` if the
/// dataset holds no finite x value.
///
/// Non-finite values (NaN, ±inf) are excluded from the scan.
#[must_use]
pub fn find_x_range(dataset: &dyn XyzDataset) -> Option<Range> {
    axis_range(dataset, |d, s, i| d.x(s, i))
}

/// Minimal closed interval covering all finite y values. See [`find_x_range`].
#[must_use]
pub fn find_y_range(dataset: &dyn XyzDataset) -> Option<Range> {
    axis_range(dataset, |d, s, i| d.y(s, i))
}

/// Minimal closed interval covering all finite z values. See [`find_x_range`].
#[must_use]
pub fn find_z_range(dataset: &dyn XyzDataset) -> Option<Range> {
    axis_range(dataset, |d, s, i| d.z(s, i))
}

fn axis_range(
    dataset: &dyn XyzDataset,
    axis: fn(&dyn XyzDataset, usize, usize) -> Result<f64>,
) -> Option<Range> {
    let mut bounds: Option<(f64, f64)> = None;
    for series in 0..dataset.series_count() {
        // Indices stay in bounds for the duration of the scan, so the
        // accessors cannot fail here.
        let count = dataset.item_count(series).ok()?;
        for item in 0..count {
            let value = axis(dataset, series, item).ok()?;
            if !value.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => (value, value),
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
            });
        }
    }
    bounds.map(|(lo, hi)| Range::new(lo, hi))
}
