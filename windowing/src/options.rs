use alloc::sync::Arc;

use crate::windower::Windower;
use crate::{Dimensions, HeightRule, Layout};

/// A callback fired when a windower state update occurs.
pub type OnChangeCallback = Arc<dyn Fn(&Windower) + Send + Sync>;

/// Configuration for [`crate::Windower`].
///
/// Cheap to clone: the callback is stored in an `Arc`, so adapters can update
/// a few fields and call `Windower::set_options` without reallocating
/// closures.
pub struct WindowerOptions {
    /// Item layout and windowing strategy.
    pub layout: Layout,
    /// Total number of items in the (virtual) list.
    pub len: usize,
    /// How the container height is resolved.
    pub height: HeightRule,

    /// Viewport dimensions applied at construction, before the first resize
    /// observation arrives.
    pub initial_dimensions: Option<Dimensions>,
    /// Scroll offset applied at construction.
    pub initial_scroll_top: u64,

    /// Optional callback fired when the windower's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl WindowerOptions {
    pub fn new(layout: Layout, len: usize) -> Self {
        Self {
            layout,
            len,
            height: HeightRule::FillParent,
            initial_dimensions: None,
            initial_scroll_top: 0,
            on_change: None,
        }
    }

    pub fn with_height(mut self, height: HeightRule) -> Self {
        self.height = height;
        self
    }

    pub fn with_initial_dimensions(mut self, dimensions: Option<Dimensions>) -> Self {
        self.initial_dimensions = dimensions;
        self
    }

    pub fn with_initial_scroll_top(mut self, scroll_top: u64) -> Self {
        self.initial_scroll_top = scroll_top;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Windower) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for WindowerOptions {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout,
            len: self.len,
            height: self.height,
            initial_dimensions: self.initial_dimensions,
            initial_scroll_top: self.initial_scroll_top,
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for WindowerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowerOptions")
            .field("layout", &self.layout)
            .field("len", &self.len)
            .field("height", &self.height)
            .field("initial_dimensions", &self.initial_dimensions)
            .field("initial_scroll_top", &self.initial_scroll_top)
            .finish_non_exhaustive()
    }
}
