//! # chart3d
//!
//! Dataset, renderer, and world-composition core for software-projected 3D
//! pie, bar, and scatter (XYZ) charts.
//!
//! The crate turns numeric data into a drawable 3D scene: datasets expose
//! multi-series values, renderers map each item to world-space primitives
//! through a swappable color source, and a plot drives the composition pass
//! into a [`World`](geometry::World) accumulator owned by the host rendering
//! pipeline. Rasterization, input handling, and UI surface wiring stay in
//! the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use chart3d::prelude::*;
//!
//! let mut series = XyzSeries::new("S1");
//! series.add(1.0, 2.0, 3.0);
//! let mut dataset = XyzSeriesCollection::new();
//! dataset.add(series)?;
//!
//! let plot = XyzPlot::new(Box::new(dataset), Box::new(ScatterRenderer::new()));
//! let mut world = World::new();
//! plot.compose(&mut world, Dim3::new(10.0, 10.0, 10.0), Offset3::ZERO)?;
//! assert_eq!(world.len(), 1);
//! # Ok::<(), chart3d::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `snapshot`: versioned chart-state snapshots with serde
//!
//! All operations run synchronously on the caller's thread; the crate holds
//! no locks and the host serializes access.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color values for chart primitives.
pub mod color;

/// World-space geometry and the composition accumulator.
pub mod geometry;

/// Axis ranges and range queries.
pub mod range;

// ============================================================================
// Data Modules
// ============================================================================

/// Dataset abstractions and series storage.
pub mod data;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Series/item -> color policies.
pub mod palette;

/// Renderer abstraction and the bar/scatter/pie renderers.
pub mod render;

/// Plots: composition-pass drivers and chart-variant dispatch.
pub mod plot;

/// Legend and axis label generators.
pub mod label;

/// Change-notification plumbing.
pub mod event;

/// Versioned chart-state snapshots.
#[cfg(feature = "snapshot")]
pub mod snapshot;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart3d operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use chart3d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::data::{
        CategoryDataset, PieDataset, XyzDataset, XyzItem, XyzSeries, XyzSeriesCollection,
    };
    pub use crate::error::{Error, Result};
    pub use crate::event::{RendererChangeEvent, RendererChangeListener};
    pub use crate::geometry::{Dim3, Offset3, Point3, Primitive, World};
    pub use crate::label::{
        PieLabelGenerator, SeriesLabelGenerator, StandardPieLabelGenerator,
        StandardSeriesLabelGenerator,
    };
    pub use crate::palette::{ColorSource, StandardColorSource, DEFAULT_PALETTE};
    pub use crate::plot::{ChartType, PiePlot, PlotId, XyzPlot};
    pub use crate::range::{find_x_range, find_y_range, find_z_range, Range};
    pub use crate::render::{
        BarRenderer, PieRenderer, RendererCore, ScatterRenderer, StandardPieRenderer, XyzRenderer,
    };
    #[cfg(feature = "snapshot")]
    pub use crate::snapshot::{ChartSnapshot, ViewPoint};
}
