//! World-space geometry for 3D chart composition.
//!
//! Renderers emit [`Primitive`]s into a [`World`] accumulator owned by the
//! host rendering pipeline. The world holds abstract chart primitives, not
//! triangles: tessellation and projection are the host backend's job.

use crate::color::Rgba;

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The world origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Return this point displaced by an offset.
    #[must_use]
    pub fn translated(self, offset: Offset3) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.z + offset.z)
    }
}

/// Width/height/depth of a plotting volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dim3 {
    /// Extent along the x axis.
    pub width: f64,
    /// Extent along the y axis.
    pub height: f64,
    /// Extent along the z axis.
    pub depth: f64,
}

impl Dim3 {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// The three spatial offsets positioning an item within world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset3 {
    /// Offset along the x axis.
    pub x: f64,
    /// Offset along the y axis.
    pub y: f64,
    /// Offset along the z axis.
    pub z: f64,
}

impl Offset3 {
    /// No displacement.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new offset.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A drawable chart primitive in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// An axis-aligned box, e.g. one bar of a bar chart.
    Cuboid {
        /// Minimum-coordinate corner.
        corner: Point3,
        /// Extent along each axis.
        size: Dim3,
    },
    /// A point marker, e.g. one scatter-plot dot.
    Marker {
        /// Marker center.
        center: Point3,
        /// Marker diameter in world units.
        size: f64,
    },
    /// An extruded circular sector, e.g. one pie-chart slice.
    Wedge {
        /// Center of the pie disc (front face).
        center: Point3,
        /// Disc radius.
        radius: f64,
        /// Extrusion depth along z.
        depth: f64,
        /// Start angle in radians, measured counterclockwise from +x.
        start_angle: f64,
        /// Angular sweep in radians.
        sweep: f64,
    },
}

/// A primitive plus the colors it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldObject {
    /// The geometry.
    pub primitive: Primitive,
    /// Fill color.
    pub color: Rgba,
    /// Edge/side shade, when the primitive is drawn with distinct walls.
    pub edge_color: Option<Rgba>,
}

/// Accumulator for one composition pass.
///
/// Owned by the host pipeline and handed to renderers per pass; renderers
/// only ever append to it.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<WorldObject>,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive with a fill color only.
    pub fn add(&mut self, primitive: Primitive, color: Rgba) {
        self.objects.push(WorldObject {
            primitive,
            color,
            edge_color: None,
        });
    }

    /// Append a primitive with fill and edge colors.
    pub fn add_shaded(&mut self, primitive: Primitive, color: Rgba, edge_color: Rgba) {
        self.objects.push(WorldObject {
            primitive,
            color,
            edge_color: Some(edge_color),
        });
    }

    /// The accumulated objects, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[WorldObject] {
        &self.objects
    }

    /// Number of accumulated objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing has been emitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_translated() {
        let p = Point3::new(1.0, 2.0, 3.0).translated(Offset3::new(0.5, -1.0, 0.0));
        assert_eq!(p, Point3::new(1.5, 1.0, 3.0));
    }

    #[test]
    fn test_world_accumulates_in_order() {
        let mut world = World::new();
        assert!(world.is_empty());

        world.add(
            Primitive::Marker {
                center: Point3::ORIGIN,
                size: 1.0,
            },
            Rgba::BLACK,
        );
        world.add_shaded(
            Primitive::Cuboid {
                corner: Point3::ORIGIN,
                size: Dim3::new(1.0, 2.0, 1.0),
            },
            Rgba::WHITE,
            Rgba::GRAY,
        );

        assert_eq!(world.len(), 2);
        assert!(matches!(
            world.objects()[0].primitive,
            Primitive::Marker { .. }
        ));
        assert_eq!(world.objects()[1].edge_color, Some(Rgba::GRAY));
    }
}
