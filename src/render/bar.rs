//! 3D bar chart renderer.

use crate::data::XyzDataset;
use crate::error::Result;
use crate::geometry::{Dim3, Offset3, Point3, Primitive, World};
use crate::render::{RendererCore, XyzRenderer};

// Brightness factor for bar edges/side walls relative to the fill.
const EDGE_SHADE: f64 = 0.6;

/// Renders each item as one axis-aligned box rising from a base value.
///
/// The item's x and z place the bar's footprint; its y sets the top of the
/// column (or the bottom, for values below the base).
#[derive(Debug)]
pub struct BarRenderer {
    core: RendererCore,
    base: f64,
    bar_width: f64,
    bar_depth: f64,
}

impl Default for BarRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BarRenderer {
    /// Create a renderer with base 0.0 and a 0.8 x 0.8 footprint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: RendererCore::new(),
            base: 0.0,
            bar_width: 0.8,
            bar_depth: 0.8,
        }
    }

    /// The value bars rise from.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Set the value bars rise from.
    pub fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    /// Set the bar footprint in world units.
    pub fn set_footprint(&mut self, width: f64, depth: f64) {
        self.bar_width = width;
        self.bar_depth = depth;
    }
}

impl XyzRenderer for BarRenderer {
    fn core(&self) -> &RendererCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RendererCore {
        &mut self.core
    }

    fn compose_item(
        &self,
        dataset: &dyn XyzDataset,
        series: usize,
        item: usize,
        world: &mut World,
        _dims: Dim3,
        offsets: Offset3,
    ) -> Result<()> {
        let x = dataset.x(series, item)?;
        let y = dataset.y(series, item)?;
        let z = dataset.z(series, item)?;
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Ok(());
        }

        let bottom = self.base.min(y);
        let corner = Point3::new(x - self.bar_width / 2.0, bottom, z - self.bar_depth / 2.0)
            .translated(offsets);
        let size = Dim3::new(self.bar_width, (y - self.base).abs(), self.bar_depth);

        let color = self.core.color_source().color_for(series, item);
        world.add_shaded(Primitive::Cuboid { corner, size }, color, color.scaled(EDGE_SHADE));
        Ok(())
    }
}

impl PartialEq for BarRenderer {
    // Color-source equality only; plot association and sizing are excluded.
    fn eq(&self, other: &Self) -> bool {
        self.eq_config(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::data::{XyzSeries, XyzSeriesCollection};
    use approx::assert_relative_eq;

    fn one_item_dataset() -> XyzSeriesCollection {
        let mut s = XyzSeries::new("A");
        s.add(2.0, 5.0, 1.0);
        let mut d = XyzSeriesCollection::new();
        d.add(s).unwrap();
        d
    }

    #[test]
    fn test_compose_item_appends_one_box() {
        let d = one_item_dataset();
        let renderer = BarRenderer::new();
        let mut world = World::new();

        renderer
            .compose_item(&d, 0, 0, &mut world, Dim3::new(10.0, 10.0, 10.0), Offset3::ZERO)
            .unwrap();

        assert_eq!(world.len(), 1);
        let object = &world.objects()[0];
        let Primitive::Cuboid { corner, size } = object.primitive else {
            panic!("expected a cuboid");
        };
        assert_relative_eq!(corner.x, 2.0 - 0.4);
        assert_relative_eq!(corner.y, 0.0);
        assert_relative_eq!(corner.z, 1.0 - 0.4);
        assert_relative_eq!(size.height, 5.0);
        assert_eq!(
            object.color,
            renderer.core().color_source().color_for(0, 0)
        );
        assert!(object.edge_color.is_some());
    }

    #[test]
    fn test_negative_value_hangs_below_base() {
        let mut s = XyzSeries::new("A");
        s.add(0.0, -3.0, 0.0);
        let mut d = XyzSeriesCollection::new();
        d.add(s).unwrap();

        let renderer = BarRenderer::new();
        let mut world = World::new();
        renderer
            .compose_item(&d, 0, 0, &mut world, Dim3::default(), Offset3::ZERO)
            .unwrap();

        let Primitive::Cuboid { corner, size } = world.objects()[0].primitive else {
            panic!("expected a cuboid");
        };
        assert_relative_eq!(corner.y, -3.0);
        assert_relative_eq!(size.height, 3.0);
    }

    #[test]
    fn test_offsets_translate_geometry() {
        let d = one_item_dataset();
        let renderer = BarRenderer::new();
        let mut world = World::new();
        renderer
            .compose_item(&d, 0, 0, &mut world, Dim3::default(), Offset3::new(10.0, 20.0, 30.0))
            .unwrap();

        let Primitive::Cuboid { corner, .. } = world.objects()[0].primitive else {
            panic!("expected a cuboid");
        };
        assert_relative_eq!(corner.x, 2.0 - 0.4 + 10.0);
        assert_relative_eq!(corner.y, 20.0);
        assert_relative_eq!(corner.z, 1.0 - 0.4 + 30.0);
    }

    #[test]
    fn test_non_finite_item_emits_nothing() {
        let mut s = XyzSeries::new("A");
        s.add(0.0, f64::NAN, 0.0);
        let mut d = XyzSeriesCollection::new();
        d.add(s).unwrap();

        let renderer = BarRenderer::new();
        let mut world = World::new();
        renderer
            .compose_item(&d, 0, 0, &mut world, Dim3::default(), Offset3::ZERO)
            .unwrap();
        assert!(world.is_empty());
    }

    #[test]
    fn test_out_of_bounds_item_fails() {
        let d = one_item_dataset();
        let renderer = BarRenderer::new();
        let mut world = World::new();
        assert!(renderer
            .compose_item(&d, 0, 9, &mut world, Dim3::default(), Offset3::ZERO)
            .is_err());
        assert!(world.is_empty());
    }

    #[test]
    fn test_equality_tracks_color_source_only() {
        let mut a = BarRenderer::new();
        let mut b = BarRenderer::new();
        b.set_base(100.0);
        assert_eq!(a, b);

        a.core_mut().set_colors(&[Rgba::BLACK]).unwrap();
        assert_ne!(a, b);

        b.core_mut().set_colors(&[Rgba::BLACK]).unwrap();
        assert_eq!(a, b);
    }
}
