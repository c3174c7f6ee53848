//! 3D pie chart renderer.

use std::f64::consts::TAU;

use crate::data::PieDataset;
use crate::error::{Error, Result};
use crate::geometry::{Dim3, Offset3, Point3, Primitive, World};
use crate::render::{PieRenderer, RendererCore};

// Brightness factor for the wedge rim relative to the fill.
const EDGE_SHADE: f64 = 0.6;

/// Renders each dataset entry as one extruded wedge.
///
/// Wedge angles are proportional to the entry's share of the dataset total;
/// the disc fills the x/y face of the plotting volume and is extruded along
/// z by a fraction of the volume depth.
#[derive(Debug)]
pub struct StandardPieRenderer {
    core: RendererCore,
    radius_fraction: f64,
    depth_fraction: f64,
}

impl Default for StandardPieRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardPieRenderer {
    /// Create a renderer with a 0.9 radius fraction and 0.2 depth fraction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: RendererCore::new(),
            radius_fraction: 0.9,
            depth_fraction: 0.2,
        }
    }

    /// Set the disc radius as a fraction of the smaller x/y extent.
    pub fn set_radius_fraction(&mut self, fraction: f64) {
        self.radius_fraction = fraction.clamp(0.0, 1.0);
    }

    /// Set the extrusion depth as a fraction of the volume depth.
    pub fn set_depth_fraction(&mut self, fraction: f64) {
        self.depth_fraction = fraction.clamp(0.0, 1.0);
    }

    // Angular share of one finite value; non-finite entries occupy no angle.
    fn sweep_for(value: f64, total: f64) -> f64 {
        if value.is_finite() && total > 0.0 {
            value / total * TAU
        } else {
            0.0
        }
    }
}

impl PieRenderer for StandardPieRenderer {
    fn core(&self) -> &RendererCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut RendererCore {
        &mut self.core
    }

    fn compose_entry(
        &self,
        dataset: &PieDataset,
        entry: usize,
        world: &mut World,
        dims: Dim3,
        offsets: Offset3,
    ) -> Result<()> {
        let value = dataset
            .value_at(entry)
            .ok_or(Error::ItemIndexOutOfBounds {
                series: 0,
                index: entry,
                count: dataset.key_count(),
            })?;

        let total = dataset.total();
        let sweep = Self::sweep_for(value, total);
        if sweep <= 0.0 {
            return Ok(());
        }

        let start_angle: f64 = (0..entry)
            .filter_map(|i| dataset.value_at(i))
            .map(|v| Self::sweep_for(v, total))
            .sum();

        let center =
            Point3::new(dims.width / 2.0, dims.height / 2.0, 0.0).translated(offsets);
        let radius = dims.width.min(dims.height) / 2.0 * self.radius_fraction;
        let depth = dims.depth * self.depth_fraction;

        // One slice per entry: the entry index is the color-series index.
        let color = self.core.color_source().color_for(entry, 0);
        world.add_shaded(
            Primitive::Wedge {
                center,
                radius,
                depth,
                start_angle,
                sweep,
            },
            color,
            color.scaled(EDGE_SHADE),
        );
        Ok(())
    }
}

impl PartialEq for StandardPieRenderer {
    // Color-source equality only.
    fn eq(&self, other: &Self) -> bool {
        self.eq_config(other)
    }
}
