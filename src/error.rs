//! Error types for chart3d operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chart3d operations.
///
/// All failures are synchronous and fail-fast: no operation partially
/// mutates its receiver before reporting one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A series or entry key already exists in the target collection.
    #[error("duplicate key: {key:?}")]
    DuplicateKey {
        /// The offending key.
        key: String,
    },

    /// A series or entry key was not found in the dataset.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A series index outside `[0, series_count)`.
    #[error("series index {index} out of bounds (series count {count})")]
    SeriesIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of series in the dataset.
        count: usize,
    },

    /// An item index outside `[0, item_count)` for the given series.
    #[error("item index {index} out of bounds for series {series} (item count {count})")]
    ItemIndexOutOfBounds {
        /// The series holding the item.
        series: usize,
        /// The requested item index.
        index: usize,
        /// The number of items in that series.
        count: usize,
    },

    /// A color source was constructed from an empty candidate sequence.
    #[error("color source requires at least one candidate color")]
    EmptyPalette,

    /// A chart-variant tag outside the known discrete set.
    #[error("unsupported chart type tag: {tag}")]
    UnsupportedChartType {
        /// The unrecognized tag value.
        tag: u32,
    },

    /// A snapshot carries a version this build does not understand.
    #[error("unsupported snapshot version: {version}")]
    UnsupportedSnapshotVersion {
        /// The version found in the snapshot.
        version: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_display() {
        let err = Error::DuplicateKey {
            key: "Series A".to_string(),
        };
        assert!(err.to_string().contains("Series A"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::ItemIndexOutOfBounds {
            series: 1,
            index: 7,
            count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }
}
