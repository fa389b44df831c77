/// The width of a rendered item in the cross axis.
///
/// Linear layouts may leave the width unspecified, in which case items stretch
/// to fill the container. Grid layouts always resolve to a fixed width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemWidth {
    /// Fill the container's width.
    #[default]
    Fill,
    /// A fixed width in pixels.
    Fixed(u32),
}

impl ItemWidth {
    /// Returns the fixed width, or `fallback` for [`ItemWidth::Fill`].
    pub fn fixed_or(&self, fallback: u32) -> u32 {
        match self {
            Self::Fill => fallback,
            Self::Fixed(w) => *w,
        }
    }
}

/// The measured pixel size of the scrolling viewport.
///
/// Updated on every resize observation. `viewport_width` is the content width
/// used to derive the column count in grid mode; `viewport_height` feeds
/// container-height resolution (see [`crate::resolve_container_height`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Dimensions {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            viewport_width,
            viewport_height,
        }
    }
}

/// The contiguous index range that must be rendered for the current scroll
/// position, plus the pixel geometry shared by every item in it.
///
/// Both bounds are inclusive and lie in `0..len`. An empty item set is
/// represented by the absence of a window (`Option<Window>::None`), never by
/// out-of-range bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    /// Inclusive.
    pub end_index: usize,
    /// Resolved item width. Always [`ItemWidth::Fixed`] in grid mode.
    pub item_width: ItemWidth,
    /// Resolved item height. In grid mode this is rescaled from the configured
    /// height to preserve the configured aspect ratio at the actual column
    /// width.
    pub item_height: u32,
    /// Number of columns per row. `1` in linear mode.
    pub columns: usize,
}

impl Window {
    /// Number of items in the window. Always at least 1: an empty window is
    /// represented as `None` by the producing operations.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// The item indexes in the window, in render order.
    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }

    /// Whether `index` falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index <= self.end_index
    }

    /// Absolute placement of the item at `index` inside the spacer element
    /// sized to the total extent.
    pub fn item(&self, index: usize) -> WindowItem {
        let row = index / self.columns;
        let col = index % self.columns;
        let left = match self.item_width {
            ItemWidth::Fill => 0,
            ItemWidth::Fixed(w) => col as u32 * w,
        };
        WindowItem {
            index,
            left,
            top: row as u64 * self.item_height as u64,
            width: self.item_width,
            height: self.item_height,
        }
    }
}

/// A single renderable item with its absolute pixel placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowItem {
    pub index: usize,
    /// Offset from the left edge of the container. `0` for fill-width items.
    pub left: u32,
    /// Offset from the top of the (virtual) full list.
    pub top: u64,
    pub width: ItemWidth,
    pub height: u32,
}

impl WindowItem {
    pub fn bottom(&self) -> u64 {
        self.top.saturating_add(self.height as u64)
    }
}
