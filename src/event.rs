//! Change-notification plumbing for renderer configuration.
//!
//! A renderer keeps an ordered set of listener handles and notifies them
//! synchronously when its configuration changes. Dispatch walks a snapshot
//! of the set; mutating the set needs `&mut` access a listener cannot hold
//! during dispatch, so re-entrant registration is unrepresentable.

use std::rc::Rc;

/// Identifies the renderer that changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererId(pub(crate) u64);

/// Payload delivered to listeners on a renderer configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RendererChangeEvent {
    /// The renderer whose configuration changed.
    pub renderer: RendererId,
}

/// Receiver of renderer change events.
pub trait RendererChangeListener {
    /// Called synchronously, on the mutating caller's thread, once per
    /// configuration change.
    fn renderer_changed(&self, event: &RendererChangeEvent);
}

/// An ordered set of listener handles with idempotent add/remove.
///
/// Identity is the `Rc` allocation: registering the same handle twice keeps
/// a single entry, so one change produces one notification per listener.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Rc<dyn RendererChangeListener>>,
}

impl ListenerSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns `false` if it was already registered.
    pub fn add(&mut self, listener: Rc<dyn RendererChangeListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, listener: &Rc<dyn RendererChangeListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
        self.listeners.len() != before
    }

    /// Whether the handle is registered.
    #[must_use]
    pub fn contains(&self, listener: &Rc<dyn RendererChangeListener>) -> bool {
        self.listeners.iter().any(|l| Rc::ptr_eq(l, listener))
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Notify every listener, in registration order.
    pub fn notify(&self, event: &RendererChangeEvent) {
        for listener in &self.listeners {
            listener.renderer_changed(event);
        }
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.listeners.len())
            .finish()
    }
}
