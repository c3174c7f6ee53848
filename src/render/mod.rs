//! Renderer abstraction and base implementation.
//!
//! A renderer owns exactly one color source, holds an optional non-owning
//! back-reference to the plot it is attached to, and emits per-item
//! geometry into a [`World`](crate::geometry::World) during a composition
//! pass. Replacing the color source fires a change event; reassigning the
//! plot does not.

mod bar;
mod pie;
mod scatter;

pub use bar::BarRenderer;
pub use pie::StandardPieRenderer;
pub use scatter::ScatterRenderer;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Rgba;
use crate::data::{PieDataset, XyzDataset};
use crate::error::Result;
use crate::event::{ListenerSet, RendererChangeEvent, RendererChangeListener, RendererId};
use crate::geometry::{Dim3, Offset3, World};
use crate::palette::{ColorSource, StandardColorSource};
use crate::plot::PlotId;

static NEXT_RENDERER_ID: AtomicU64 = AtomicU64::new(1);

/// Shared state and behavior of every renderer.
///
/// Concrete renderers embed one of these and expose it through
/// [`XyzRenderer::core`] / [`PieRenderer::core`].
#[derive(Debug)]
pub struct RendererCore {
    id: RendererId,
    plot: Option<PlotId>,
    color_source: Box<dyn ColorSource>,
    listeners: ListenerSet,
}

impl Default for RendererCore {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererCore {
    /// Create a core with the default color source installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: RendererId(NEXT_RENDERER_ID.fetch_add(1, Ordering::Relaxed)),
            plot: None,
            color_source: Box::new(StandardColorSource::default_palette()),
            listeners: ListenerSet::new(),
        }
    }

    /// This renderer's identity, carried in change events.
    #[must_use]
    pub fn id(&self) -> RendererId {
        self.id
    }

    /// The plot this renderer is attached to, if any.
    #[must_use]
    pub fn plot(&self) -> Option<PlotId> {
        self.plot
    }

    /// Attach to (or detach from) a plot. Does not fire a change event.
    pub fn set_plot(&mut self, plot: Option<PlotId>) {
        self.plot = plot;
    }

    /// The owned color source. Never absent.
    #[must_use]
    pub fn color_source(&self) -> &dyn ColorSource {
        self.color_source.as_ref()
    }

    /// Replace the color source and fire one change event.
    pub fn set_color_source(&mut self, source: Box<dyn ColorSource>) {
        self.color_source = source;
        self.fire_change_event();
    }

    /// Replace the color source with a standard source over `colors`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`](crate::Error::EmptyPalette) if `colors` is
    /// empty; no change event fires and the current source is kept.
    pub fn set_colors(&mut self, colors: &[Rgba]) -> Result<()> {
        let source = StandardColorSource::new(colors)?;
        self.set_color_source(Box::new(source));
        Ok(())
    }

    /// Register a change listener. Idempotent per handle.
    pub fn add_change_listener(&mut self, listener: Rc<dyn RendererChangeListener>) -> bool {
        self.listeners.add(listener)
    }

    /// Remove a change listener. Idempotent per handle.
    pub fn remove_change_listener(&mut self, listener: &Rc<dyn RendererChangeListener>) -> bool {
        self.listeners.remove(listener)
    }

    /// Synchronously notify every registered listener.
    pub fn fire_change_event(&self) {
        self.listeners.notify(&RendererChangeEvent { renderer: self.id });
    }
}

/// A renderer over [`XyzDataset`]s.
pub trait XyzRenderer {
    /// Shared renderer state.
    fn core(&self) -> &RendererCore;

    /// Shared renderer state, mutable.
    fn core_mut(&mut self) -> &mut RendererCore;

    /// Emit the geometry for one data item into `world`.
    ///
    /// Invoked once per visible item by the owning plot during a composition
    /// pass. `dims` is the target plotting volume and `offsets` positions
    /// the item within world coordinates. The only observable effect is
    /// mutation of `world`; items with non-finite coordinates emit nothing.
    ///
    /// # Errors
    ///
    /// Out-of-bounds series or item index.
    fn compose_item(
        &self,
        dataset: &dyn XyzDataset,
        series: usize,
        item: usize,
        world: &mut World,
        dims: Dim3,
        offsets: Offset3,
    ) -> Result<()>;

    /// Configuration equality: color sources equal, plot association
    /// deliberately excluded (it is a non-owning back-reference).
    fn eq_config(&self, other: &dyn XyzRenderer) -> bool {
        self.core()
            .color_source()
            .eq_source(other.core().color_source())
    }
}

/// A renderer over [`PieDataset`]s.
pub trait PieRenderer {
    /// Shared renderer state.
    fn core(&self) -> &RendererCore;

    /// Shared renderer state, mutable.
    fn core_mut(&mut self) -> &mut RendererCore;

    /// Emit the geometry for one dataset entry into `world`.
    ///
    /// Same contract as [`XyzRenderer::compose_item`], with the entry index
    /// standing in for the (series, item) pair.
    ///
    /// # Errors
    ///
    /// Out-of-bounds entry index.
    fn compose_entry(
        &self,
        dataset: &PieDataset,
        entry: usize,
        world: &mut World,
        dims: Dim3,
        offsets: Offset3,
    ) -> Result<()>;

    /// Configuration equality; see [`XyzRenderer::eq_config`].
    fn eq_config(&self, other: &dyn PieRenderer) -> bool {
        self.core()
            .color_source()
            .eq_source(other.core().color_source())
    }
}
