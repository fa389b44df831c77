use windowing::{Dimensions, HeightProbe, Window, Windower, WindowerOptions};

use crate::HostEvent;

/// A framework-neutral controller that wraps a [`windowing::Windower`] and
/// implements the host-side ordering contract: rapid successive events are
/// coalesced to their most recent value before the calculator is re-invoked,
/// and a recompute that does not change the window is not reported.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_resize` / `on_scroll` / `on_measure` (or `on_event`) when UI events
///   occur
/// - `flush()` once per frame/tick; a `true` result means the window changed
///   and the host should re-render `window()`
///
/// Between flushes only the latest value per input is retained (coalescing,
/// not queuing), so a recompute superseded by a newer event is discarded
/// rather than applied out of order.
#[derive(Clone, Debug)]
pub struct Controller {
    w: Windower,
    pending_dims: Option<Dimensions>,
    pending_scroll: Option<u64>,
    pending_probe: Option<HeightProbe>,
    last_window: Option<Window>,
}

impl Controller {
    pub fn new(options: WindowerOptions) -> Self {
        Self::from_windower(Windower::new(options))
    }

    pub fn from_windower(w: Windower) -> Self {
        Self {
            last_window: w.window(),
            w,
            pending_dims: None,
            pending_scroll: None,
            pending_probe: None,
        }
    }

    pub fn windower(&self) -> &Windower {
        &self.w
    }

    /// Direct mutable access to the wrapped windower.
    ///
    /// Changes made here bypass coalescing but are still picked up by the next
    /// `flush()` diff.
    pub fn windower_mut(&mut self) -> &mut Windower {
        &mut self.w
    }

    pub fn into_windower(self) -> Windower {
        self.w
    }

    /// The window delivered by the last `flush()` (or the initial state).
    ///
    /// `None` when the list is empty.
    pub fn window(&self) -> Option<Window> {
        self.last_window
    }

    pub fn has_pending(&self) -> bool {
        self.pending_dims.is_some() || self.pending_scroll.is_some() || self.pending_probe.is_some()
    }

    /// Records a resize observation. A later resize before the next flush
    /// replaces it.
    pub fn on_resize(&mut self, dims: Dimensions) {
        self.pending_dims = Some(dims);
    }

    /// Records a scroll event. A later scroll before the next flush replaces
    /// it.
    pub fn on_scroll(&mut self, scroll_top: u64) {
        self.pending_scroll = Some(scroll_top);
    }

    /// Records a container measurement (top offset, parent height).
    pub fn on_measure(&mut self, probe: HeightProbe) {
        self.pending_probe = Some(probe);
    }

    pub fn on_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resized(dims) => self.on_resize(dims),
            HostEvent::Scrolled(scroll_top) => self.on_scroll(scroll_top),
            HostEvent::Measured(probe) => self.on_measure(probe),
        }
    }

    /// Applies all pending event values in a single batched update, then
    /// recomputes the window.
    ///
    /// Returns `true` when the window changed since the last delivery; the
    /// host should then re-render [`Controller::window`].
    pub fn flush(&mut self) -> bool {
        if self.has_pending() {
            let dims = self.pending_dims.take();
            let probe = self.pending_probe.take();
            let scroll = self.pending_scroll.take();
            self.w.batch_update(|w| {
                if let Some(dims) = dims {
                    w.set_dimensions(dims);
                }
                if let Some(probe) = probe {
                    w.set_height_probe(probe);
                }
                if let Some(scroll_top) = scroll {
                    w.set_scroll_top(scroll_top);
                }
            });
        }

        let next = self.w.window();
        if next != self.last_window {
            self.last_window = next;
            true
        } else {
            false
        }
    }

    /// Drops any pending event values without applying them.
    pub fn discard_pending(&mut self) {
        self.pending_dims = None;
        self.pending_scroll = None;
        self.pending_probe = None;
    }
}
