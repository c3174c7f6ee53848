//! Versioned chart-state snapshots.
//!
//! An explicit, layout-independent record of the host-visible chart state:
//! a chart-variant tag, the view point, and numeric parameters. The host
//! picks the wire format via serde; decoding an unknown version or tag
//! fails instead of being guessed at.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::plot::ChartType;

/// The snapshot layout version this build writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Spherical-coordinate camera position for a 3D chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    /// Rotation around the vertical axis, radians.
    pub theta: f64,
    /// Elevation angle, radians.
    pub phi: f64,
    /// Distance from the chart origin.
    pub rho: f64,
}

impl ViewPoint {
    /// Create a view point.
    #[must_use]
    pub const fn new(theta: f64, phi: f64, rho: f64) -> Self {
        Self { theta, phi, rho }
    }
}

/// A versioned snapshot of chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    version: u32,
    chart_type: u32,
    view_point: ViewPoint,
    params: Vec<f64>,
}

impl ChartSnapshot {
    /// Snapshot the given chart state at the current layout version.
    #[must_use]
    pub fn new(chart_type: ChartType, view_point: ViewPoint) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            chart_type: chart_type.tag(),
            view_point,
            params: Vec::new(),
        }
    }

    /// Attach chart-variant-specific numeric parameters.
    #[must_use]
    pub fn with_params(mut self, params: Vec<f64>) -> Self {
        self.params = params;
        self
    }

    /// The layout version this snapshot was written with.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The recorded view point.
    #[must_use]
    pub fn view_point(&self) -> ViewPoint {
        self.view_point
    }

    /// The recorded numeric parameters.
    #[must_use]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Decode the chart variant.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSnapshotVersion`] if this build does not
    /// understand the snapshot's version;
    /// [`Error::UnsupportedChartType`](crate::Error::UnsupportedChartType)
    /// for an unknown variant tag.
    pub fn chart_type(&self) -> Result<ChartType> {
        if self.version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedSnapshotVersion {
                version: self.version,
            });
        }
        ChartType::from_tag(self.chart_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrips_chart_type() {
        let snapshot = ChartSnapshot::new(ChartType::Bar, ViewPoint::new(1.0, 0.5, 40.0));
        assert_eq!(snapshot.version(), SNAPSHOT_VERSION);
        assert_eq!(snapshot.chart_type().unwrap(), ChartType::Bar);
        assert_eq!(snapshot.view_point(), ViewPoint::new(1.0, 0.5, 40.0));
    }

    #[test]
    fn test_snapshot_params() {
        let snapshot = ChartSnapshot::new(ChartType::Scatter, ViewPoint::new(0.0, 0.0, 10.0))
            .with_params(vec![0.25]);
        assert_eq!(snapshot.params(), &[0.25]);
    }

    #[test]
    fn test_unknown_version_fails() {
        let mut snapshot = ChartSnapshot::new(ChartType::Pie, ViewPoint::new(0.0, 0.0, 1.0));
        snapshot.version = 99;
        assert_eq!(
            snapshot.chart_type(),
            Err(Error::UnsupportedSnapshotVersion { version: 99 })
        );
    }

    #[test]
    fn test_unknown_tag_fails() {
        let mut snapshot = ChartSnapshot::new(ChartType::Pie, ViewPoint::new(0.0, 0.0, 1.0));
        snapshot.chart_type = 7;
        assert!(matches!(
            snapshot.chart_type(),
            Err(Error::UnsupportedChartType { tag: 7 })
        ));
    }
}
