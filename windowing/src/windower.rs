use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::height::resolve_container_height;
use crate::{
    Dimensions, HeightProbe, HeightRule, ItemWidth, Layout, Window, WindowItem, WindowerOptions,
};

/// A headless windowing engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport dimensions, container
///   measurements, and scroll offsets.
/// - Rendering is exposed via the returned [`Window`] and the zero-allocation
///   [`Windower::for_each_item`].
///
/// For event coalescing and slot-reuse patterns, see the `windowing-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Windower {
    options: WindowerOptions,
    dims: Dimensions,
    scroll_top: u64,
    probe: HeightProbe,
    container_height: u32,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Windower {
    /// Creates a new windower from options.
    ///
    /// If `options.initial_dimensions` and/or `options.initial_scroll_top` are
    /// set, those values are applied immediately.
    pub fn new(options: WindowerOptions) -> Self {
        let dims = options.initial_dimensions.unwrap_or_default();
        let scroll_top = options.initial_scroll_top;
        let probe = HeightProbe::default();
        wdebug!(
            len = options.len,
            layout = ?options.layout,
            "Windower::new"
        );
        Self {
            container_height: resolve_container_height(
                &options.height,
                dims.viewport_height,
                probe,
            ),
            options,
            dims,
            scroll_top,
            probe,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &WindowerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowerOptions) {
        self.options = options;
        wdebug!(
            len = self.options.len,
            layout = ?self.options.layout,
            "Windower::set_options"
        );
        self.container_height = self.resolved_container_height();
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut WindowerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Windower) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended for adapters: on a typical frame you might update the
    /// dimensions, scroll offset, and container measurements together. Without
    /// batching, each setter may trigger `on_change`, which can be expensive
    /// if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn len(&self) -> usize {
        self.options.len
    }

    pub fn is_empty(&self) -> bool {
        self.options.len == 0
    }

    pub fn layout(&self) -> Layout {
        self.options.layout
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn height_probe(&self) -> HeightProbe {
        self.probe
    }

    /// The current resolved container height.
    ///
    /// Recomputed whenever the configuration, dimensions, or probe change;
    /// a [`HeightRule::Fixed`] value is returned as configured, unaffected by
    /// measurements.
    pub fn container_height(&self) -> u32 {
        self.container_height
    }

    pub fn set_len(&mut self, len: usize) {
        if self.options.len == len {
            return;
        }
        wdebug!(len, "Windower::set_len");
        self.options.len = len;
        self.notify();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.options.layout == layout {
            return;
        }
        wdebug!(layout = ?layout, "Windower::set_layout");
        self.options.layout = layout;
        self.notify();
    }

    pub fn set_height_rule(&mut self, height: HeightRule) {
        if self.options.height == height {
            return;
        }
        self.options.height = height;
        self.container_height = self.resolved_container_height();
        self.notify();
    }

    pub fn set_dimensions(&mut self, dims: Dimensions) {
        if self.dims == dims {
            return;
        }
        self.dims = dims;
        self.container_height = self.resolved_container_height();
        self.notify();
    }

    pub fn set_height_probe(&mut self, probe: HeightProbe) {
        if self.probe == probe {
            return;
        }
        self.probe = probe;
        let next = self.resolved_container_height();
        // Only a changed resolution propagates downstream; a probe update that
        // resolves to the same height must not oscillate.
        if next != self.container_height {
            self.container_height = next;
            self.notify();
        }
    }

    pub fn set_scroll_top(&mut self, scroll_top: u64) {
        if self.scroll_top == scroll_top {
            return;
        }
        self.scroll_top = scroll_top;
        self.notify();
    }

    pub fn set_scroll_top_clamped(&mut self, scroll_top: u64) {
        let clamped = self.clamp_scroll_top(scroll_top);
        self.set_scroll_top(clamped);
    }

    /// Applies a scroll offset update from your UI layer (e.g. wheel/drag).
    pub fn apply_scroll_event(&mut self, scroll_top: u64) {
        wtrace!(scroll_top, "apply_scroll_event");
        self.batch_update(|w| {
            w.set_scroll_top(scroll_top);
        });
    }

    /// Applies a resize observation: new viewport dimensions plus the
    /// container measurements taken at the same time.
    pub fn apply_resize_event(&mut self, dims: Dimensions, probe: HeightProbe) {
        wtrace!(
            viewport_width = dims.viewport_width,
            viewport_height = dims.viewport_height,
            "apply_resize_event"
        );
        self.batch_update(|w| {
            w.set_dimensions(dims);
            w.set_height_probe(probe);
        });
    }

    /// Applies dimensions and scroll offset in a single coalesced update.
    ///
    /// This is the recommended entry point for adapters that receive scroll
    /// events along with updated viewport information.
    pub fn apply_frame_event(&mut self, dims: Dimensions, scroll_top: u64) {
        wtrace!(
            viewport_width = dims.viewport_width,
            viewport_height = dims.viewport_height,
            scroll_top,
            "apply_frame_event"
        );
        self.batch_update(|w| {
            w.set_dimensions(dims);
            w.set_scroll_top(scroll_top);
        });
    }

    /// Total scrollable extent of the fully-rendered (virtual) list.
    pub fn total_extent(&self) -> u64 {
        self.options
            .layout
            .total_extent(self.dims, self.options.len)
    }

    /// The largest meaningful scroll offset: scrolling past it shows the same
    /// final window.
    pub fn max_scroll_top(&self) -> u64 {
        self.total_extent()
            .saturating_sub(self.container_height as u64)
    }

    pub fn clamp_scroll_top(&self, scroll_top: u64) -> u64 {
        scroll_top.min(self.max_scroll_top())
    }

    /// The window of items to render at the current state.
    ///
    /// `None` when the list is empty.
    pub fn window(&self) -> Option<Window> {
        self.options.layout.window(
            self.options.len,
            self.scroll_top,
            self.container_height,
            self.dims,
        )
    }

    /// Window for an explicit scroll offset, leaving the stored state
    /// untouched.
    pub fn window_for(&self, scroll_top: u64) -> Option<Window> {
        self.options.layout.window(
            self.options.len,
            scroll_top,
            self.container_height,
            self.dims,
        )
    }

    /// Iterates over the renderable items of the current window without
    /// allocations.
    pub fn for_each_item(&self, mut f: impl FnMut(WindowItem)) {
        let Some(window) = self.window() else {
            return;
        };
        for index in window.indices() {
            f(window.item(index));
        }
    }

    /// Collects the renderable items of the current window into `out`
    /// (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_item`]. For
    /// maximum performance, prefer `for_each_item` and reuse a scratch buffer
    /// in your adapter.
    pub fn collect_items(&self, out: &mut Vec<WindowItem>) {
        out.clear();
        self.for_each_item(|item| out.push(item));
    }

    /// Absolute placement of the item at `index`, independent of the current
    /// window. `None` when `index` is out of bounds.
    pub fn item_origin(&self, index: usize) -> Option<WindowItem> {
        if index >= self.options.len {
            return None;
        }
        let columns = self.options.layout.columns(self.dims.viewport_width);
        let (width, height) = self.options.layout.cell(self.dims);
        let left = match width {
            ItemWidth::Fill => 0,
            ItemWidth::Fixed(w) => (index % columns) as u32 * w,
        };
        Some(WindowItem {
            index,
            left,
            top: (index / columns) as u64 * height as u64,
            width,
            height,
        })
    }

    fn resolved_container_height(&self) -> u32 {
        resolve_container_height(&self.options.height, self.dims.viewport_height, self.probe)
    }
}
