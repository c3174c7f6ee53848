//! 3D scatter chart renderer.

use crate::data::XyzDataset;
use crate::error::Result;
use crate::geometry::{Dim3, Offset3, Point3, Primitive, World};
use crate::render::{RendererCore, XyzRenderer};

/// Renders each item as one point marker at its (x, y, z) position.
#[derive(Debug)]
pub struct ScatterRenderer {
    core: RendererCore,
    marker_size: f64,
}

impl Default for ScatterRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScatterRenderer {
    /// Create a renderer with the default marker size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: RendererCore::new(),
            marker_size: 0.2,
        }
    }

    /// Marker diameter in world units.
    #[must_use]
    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    /// Set the marker diameter in world units.
    pub fn set_marker_size(&mut self, size: f64) {
        self.marker_size = size;
    }
}

impl XyzRenderer for ScatterRenderer {
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

        let center = Point3::new(x, y, z).translated(offsets);
        let color = self.core.color_source().color_for(series, item);
        world.add(
            Primitive::Marker {
                center,
                size: self.marker_size,
            },
            color,
        );
        Ok(())
    }
}

impl PartialEq for ScatterRenderer {
    // Color-source equality only.
    fn eq(&self, other: &Self) -> bool {
        self.eq_config(other)
    }
}
