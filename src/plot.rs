//! Plots: the composition-pass drivers.
//!
//! A plot owns a dataset and a renderer and walks every visible item once
//! per pass, invoking the renderer's compose operation into a host-supplied
//! [`World`]. The renderer keeps a non-owning [`PlotId`] back-reference so
//! no ownership cycle exists between plot and renderer.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::data::{PieDataset, XyzDataset};
use crate::error::{Error, Result};
use crate::geometry::{Dim3, Offset3, World};
use crate::render::{PieRenderer, XyzRenderer};

static NEXT_PLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque non-owning handle to a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlotId(u64);

impl PlotId {
    /// Allocate a fresh, process-unique handle.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_PLOT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The known chart variants, for explicit tagged dispatch in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartType {
    /// Pie chart over a [`PieDataset`].
    Pie,
    /// 3D bar chart over an XYZ dataset.
    Bar,
    /// 3D scatter chart over an XYZ dataset.
    Scatter,
}

impl ChartType {
    /// Stable numeric tag for snapshots and host dispatch tables.
    #[must_use]
    pub fn tag(self) -> u32 {
        match self {
            ChartType::Pie => 0,
            ChartType::Bar => 1,
            ChartType::Scatter => 2,
        }
    }

    /// Decode a numeric tag.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedChartType`] for any tag outside the known set.
    /// Within the crate invalid variants are unrepresentable; a tag only
    /// enters from persisted or host-supplied data, where an unknown value
    /// must surface rather than be guessed at.
    pub fn from_tag(tag: u32) -> Result<Self> {
        match tag {
            0 => Ok(ChartType::Pie),
            1 => Ok(ChartType::Bar),
            2 => Ok(ChartType::Scatter),
            _ => Err(Error::UnsupportedChartType { tag }),
        }
    }
}

/// A plot over an XYZ dataset.
pub struct XyzPlot {
    id: PlotId,
    dataset: Box<dyn XyzDataset>,
    renderer: Box<dyn XyzRenderer>,
}

impl XyzPlot {
    /// Create a plot, attaching the renderer to it.
    #[must_use]
    pub fn new(dataset: Box<dyn XyzDataset>, mut renderer: Box<dyn XyzRenderer>) -> Self {
        let id = PlotId::next();
        renderer.core_mut().set_plot(Some(id));
        Self {
            id,
            dataset,
            renderer,
        }
    }

    /// This plot's handle.
    #[must_use]
    pub fn id(&self) -> PlotId {
        self.id
    }

    /// The dataset being plotted.
    #[must_use]
    pub fn dataset(&self) -> &dyn XyzDataset {
        self.dataset.as_ref()
    }

    /// The attached renderer.
    #[must_use]
    pub fn renderer(&self) -> &dyn XyzRenderer {
        self.renderer.as_ref()
    }

    /// The attached renderer, mutable (e.g. to reconfigure its colors or
    /// register change listeners).
    pub fn renderer_mut(&mut self) -> &mut dyn XyzRenderer {
        self.renderer.as_mut()
    }

    /// Replace the renderer, detaching the old one and attaching the new.
    pub fn set_renderer(&mut self, mut renderer: Box<dyn XyzRenderer>) {
        self.renderer.core_mut().set_plot(None);
        renderer.core_mut().set_plot(Some(self.id));
        self.renderer = renderer;
    }

    /// Run one full composition pass: every item of every series, in index
    /// order, through [`XyzRenderer::compose_item`].
    ///
    /// # Errors
    ///
    /// Propagates the first renderer failure; `world` keeps whatever was
    /// emitted before it.
    pub fn compose(&self, world: &mut World, dims: Dim3, offsets: Offset3) -> Result<()> {
        for series in 0..self.dataset.series_count() {
            for item in 0..self.dataset.item_count(series)? {
                self.renderer
                    .compose_item(self.dataset.as_ref(), series, item, world, dims, offsets)?;
            }
        }
        Ok(())
    }
}

/// A plot over a pie dataset.
pub struct PiePlot {
    id: PlotId,
    dataset: PieDataset,
    renderer: Box<dyn PieRenderer>,
}

impl PiePlot {
    /// Create a plot, attaching the renderer to it.
    #[must_use]
    pub fn new(dataset: PieDataset, mut renderer: Box<dyn PieRenderer>) -> Self {
        let id = PlotId::next();
        renderer.core_mut().set_plot(Some(id));
        Self {
            id,
            dataset,
            renderer,
        }
    }

    /// This plot's handle.
    #[must_use]
    pub fn id(&self) -> PlotId {
        self.id
    }

    /// The dataset being plotted.
    #[must_use]
    pub fn dataset(&self) -> &PieDataset {
        &self.dataset
    }

    /// The attached renderer.
    #[must_use]
    pub fn renderer(&self) -> &dyn PieRenderer {
        self.renderer.as_ref()
    }

    /// The attached renderer, mutable.
    pub fn renderer_mut(&mut self) -> &mut dyn PieRenderer {
        self.renderer.as_mut()
    }

    /// Run one full composition pass over every entry.
    ///
    /// # Errors
    ///
    /// Propagates the first renderer failure.
    pub fn compose(&self, world: &mut World, dims: Dim3, offsets: Offset3) -> Result<()> {
        for entry in 0..self.dataset.key_count() {
            self.renderer
                .compose_entry(&self.dataset, entry, world, dims, offsets)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{XyzSeries, XyzSeriesCollection};
    use crate::render::{BarRenderer, StandardPieRenderer};

    #[test]
    fn test_chart_type_tag_roundtrip() {
        for chart_type in [ChartType::Pie, ChartType::Bar, ChartType::Scatter] {
            assert_eq!(ChartType::from_tag(chart_type.tag()).unwrap(), chart_type);
        }
    }

    #[test]
    fn test_unknown_tag_fails() {
        assert_eq!(
            ChartType::from_tag(99),
            Err(Error::UnsupportedChartType { tag: 99 })
        );
    }

    #[test]
    fn test_new_plot_attaches_renderer() {
        let plot = XyzPlot::new(
            Box::new(XyzSeriesCollection::new()),
            Box::new(BarRenderer::new()),
        );
        assert_eq!(plot.renderer().core().plot(), Some(plot.id()));
    }

    #[test]
    fn test_set_renderer_reattaches() {
        let mut plot = XyzPlot::new(
            Box::new(XyzSeriesCollection::new()),
            Box::new(BarRenderer::new()),
        );
        plot.set_renderer(Box::new(BarRenderer::new()));
        assert_eq!(plot.renderer().core().plot(), Some(plot.id()));
    }

    #[test]
    fn test_compose_visits_every_item() {
        let mut a = XyzSeries::new("A");
        a.add(0.0, 1.0, 0.0);
        a.add(1.0, 2.0, 0.0);
        let mut b = XyzSeries::new("B");
        b.add(0.0, 3.0, 1.0);
        let mut dataset = XyzSeriesCollection::new();
        dataset.add(a).unwrap();
        dataset.add(b).unwrap();

        let plot = XyzPlot::new(Box::new(dataset), Box::new(BarRenderer::new()));
        let mut world = World::new();
        plot.compose(&mut world, Dim3::new(10.0, 10.0, 10.0), Offset3::ZERO)
            .unwrap();
        assert_eq!(world.len(), 3);
    }

    #[test]
    fn test_pie_plot_compose() {
        let mut dataset = PieDataset::new();
        dataset.insert("a", 2.0);
        dataset.insert("b", 2.0);

        let plot = PiePlot::new(dataset, Box::new(StandardPieRenderer::new()));
        let mut world = World::new();
        plot.compose(&mut world, Dim3::new(10.0, 10.0, 10.0), Offset3::ZERO)
            .unwrap();
        assert_eq!(world.len(), 2);
        assert_eq!(plot.renderer().core().plot(), Some(plot.id()));
    }
}
