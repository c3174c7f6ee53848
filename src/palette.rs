//! Color sources: series/item index -> display color policies.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Default candidate palette installed on newly constructed renderers.
pub const DEFAULT_PALETTE: [Rgba; 8] = [
    Rgba::rgb(31, 119, 180),
    Rgba::rgb(255, 127, 14),
    Rgba::rgb(44, 160, 44),
    Rgba::rgb(214, 39, 40),
    Rgba::rgb(148, 103, 189),
    Rgba::rgb(140, 86, 75),
    Rgba::rgb(227, 119, 194),
    Rgba::rgb(127, 127, 127),
];

/// Stateless mapping from series/item indices to display colors.
///
/// Decoupled from renderers so palettes can be swapped without touching
/// geometry logic. Sources expose their candidate sequence so two sources
/// can be compared across trait objects.
pub trait ColorSource: std::fmt::Debug {
    /// Color for one data item.
    fn color_for(&self, series: usize, item: usize) -> Rgba;

    /// Color for a series' legend swatch.
    fn legend_color_for(&self, series: usize) -> Rgba;

    /// The ordered candidate sequence backing this source.
    fn candidates(&self) -> &[Rgba];

    /// Element-wise equality with another source.
    fn eq_source(&self, other: &dyn ColorSource) -> bool {
        self.candidates() == other.candidates()
    }
}

/// The standard wrap-around color source.
///
/// Both lookups index the candidate sequence at `series % len`; the item
/// index is accepted but ignored, so coloring is per-series only and the
/// legend swatch always matches the items it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardColorSource {
    colors: Vec<Rgba>,
}

impl StandardColorSource {
    /// Create a source from a candidate sequence.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] if `colors` is empty.
    pub fn new(colors: &[Rgba]) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// A source over [`DEFAULT_PALETTE`].
    #[must_use]
    pub fn default_palette() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl ColorSource for StandardColorSource {
    fn color_for(&self, series: usize, _item: usize) -> Rgba {
        self.colors[series % self.colors.len()]
    }

    fn legend_color_for(&self, series: usize) -> Rgba {
        self.colors[series % self.colors.len()]
    }

    fn candidates(&self) -> &[Rgba] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_candidates_rejected() {
        assert_eq!(StandardColorSource::new(&[]), Err(Error::EmptyPalette));
    }

    #[test]
    fn test_wrap_around_lookup() {
        let colors = [Rgba::rgb(1, 0, 0), Rgba::rgb(0, 1, 0), Rgba::rgb(0, 0, 1)];
        let source = StandardColorSource::new(&colors).unwrap();

        assert_eq!(source.color_for(0, 0), colors[0]);
        assert_eq!(source.color_for(3, 0), colors[0]);
        assert_eq!(source.color_for(4, 9), colors[1]);
        assert_eq!(source.legend_color_for(5), colors[2]);
    }

    #[test]
    fn test_item_index_ignored() {
        let source = StandardColorSource::default_palette();
        assert_eq!(source.color_for(2, 0), source.color_for(2, 99));
        assert_eq!(source.color_for(2, 0), source.legend_color_for(2));
    }

    #[test]
    fn test_equality_by_candidates() {
        let a = StandardColorSource::new(&[Rgba::BLACK, Rgba::WHITE]).unwrap();
        let b = StandardColorSource::new(&[Rgba::BLACK, Rgba::WHITE]).unwrap();
        let c = StandardColorSource::new(&[Rgba::BLACK, Rgba::GRAY]).unwrap();

        assert!(a.eq_source(&b));
        assert!(!a.eq_source(&c));
        // Length mismatch
        let d = StandardColorSource::new(&[Rgba::BLACK]).unwrap();
        assert!(!a.eq_source(&d));
    }

    proptest! {
        #[test]
        fn prop_color_for_is_series_mod_len(
            len in 1usize..16,
            series in 0usize..256,
            item in 0usize..256,
        ) {
            let colors: Vec<Rgba> = (0..len).map(|i| Rgba::rgb(i as u8, 0, 0)).collect();
            let source = StandardColorSource::new(&colors).unwrap();
            prop_assert_eq!(source.color_for(series, item), colors[series % len]);
            prop_assert_eq!(source.legend_color_for(series), colors[series % len]);
        }
    }
}
