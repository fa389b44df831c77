use crate::{Dimensions, ItemWidth, Window};

/// Item layout for a windowed container, selecting the windowing strategy.
///
/// The numeric preconditions are caller contracts, not runtime errors:
/// `item_height` must be positive, and a grid's `item_width` must be positive.
/// The constructors debug-assert them so misuse is caught in development.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// A vertical list: one item per row, fixed row height.
    Linear {
        item_height: u32,
        item_width: ItemWidth,
    },
    /// A wrapping grid: as many fixed-width columns as fit the viewport.
    ///
    /// The configured width/height act as a minimum cell size and aspect
    /// ratio; the actual cell is scaled to the per-column width at the current
    /// viewport (see [`Layout::cell`]).
    Grid { item_width: u32, item_height: u32 },
}

impl Layout {
    /// A vertical list with fill-width items.
    pub fn linear(item_height: u32) -> Self {
        debug_assert!(item_height > 0, "item_height must be positive");
        Self::Linear {
            item_height,
            item_width: ItemWidth::Fill,
        }
    }

    /// A vertical list with fixed-width items.
    pub fn linear_fixed_width(item_height: u32, item_width: u32) -> Self {
        debug_assert!(item_height > 0, "item_height must be positive");
        Self::Linear {
            item_height,
            item_width: ItemWidth::Fixed(item_width),
        }
    }

    /// A wrapping grid of `item_width` x `item_height` cells.
    pub fn grid(item_width: u32, item_height: u32) -> Self {
        debug_assert!(item_width > 0, "grid item_width must be positive");
        debug_assert!(item_height > 0, "item_height must be positive");
        Self::Grid {
            item_width,
            item_height,
        }
    }

    /// Number of columns per row at the given viewport width.
    ///
    /// A viewport narrower than one configured item still yields one column.
    pub fn columns(&self, viewport_width: u32) -> usize {
        match self {
            Self::Linear { .. } => 1,
            Self::Grid { item_width, .. } => {
                ((viewport_width / item_width) as usize).max(1)
            }
        }
    }

    /// Resolved cell geometry `(width, height)` at the given dimensions.
    ///
    /// Linear cells pass the configured width/height through. Grid cells split
    /// the viewport evenly across the columns and rescale the height to keep
    /// the configured aspect ratio at the actual column width: a grid exactly
    /// `columns * item_width` wide keeps the configured height, a wider one
    /// grows its rows proportionally.
    pub fn cell(&self, dims: Dimensions) -> (ItemWidth, u32) {
        match *self {
            Self::Linear {
                item_height,
                item_width,
            } => (item_width, item_height),
            Self::Grid {
                item_width,
                item_height,
            } => {
                let columns = self.columns(dims.viewport_width) as u32;
                let width = dims.viewport_width / columns;
                let height =
                    (item_height as u64 * width as u64 / item_width as u64) as u32;
                (ItemWidth::Fixed(width), height)
            }
        }
    }

    /// Total scrollable extent in pixels of the fully-rendered list of `len`
    /// items, used to size the scrollbar spacer.
    pub fn total_extent(&self, dims: Dimensions, len: usize) -> u64 {
        match *self {
            Self::Linear { item_height, .. } => item_height as u64 * len as u64,
            Self::Grid { .. } => {
                let columns = self.columns(dims.viewport_width);
                let (_, height) = self.cell(dims);
                len.div_ceil(columns) as u64 * height as u64
            }
        }
    }

    /// Computes the window of item indexes to render for the current scroll
    /// position, buffered by two container-heights in each direction so fast
    /// scrolling does not expose blank gaps before the next recompute.
    ///
    /// Returns `None` when `len == 0`. When `container_height` is 0 (not yet
    /// measured) the window degenerates to a single row/item; callers must
    /// tolerate a momentarily under-filled window until the next measurement
    /// arrives.
    pub fn window(
        &self,
        len: usize,
        scroll_top: u64,
        container_height: u32,
        dims: Dimensions,
    ) -> Option<Window> {
        if len == 0 {
            return None;
        }
        let last = len - 1;

        match *self {
            Self::Linear {
                item_height,
                item_width,
            } => {
                let page = (2 * container_height / item_height) as usize;
                let first = (scroll_top / item_height as u64) as usize;
                let start_index = first.saturating_sub(page).min(last);
                let end_index = (start_index + 2 * page).min(last);
                Some(Window {
                    start_index,
                    end_index,
                    item_width,
                    item_height,
                    columns: 1,
                })
            }
            Self::Grid { .. } => {
                let columns = self.columns(dims.viewport_width);
                let (item_width, item_height) = self.cell(dims);

                // Unmeasured viewport: the scaled height collapses to zero, so
                // pin the window to the first row instead of dividing by it.
                let row = if item_height == 0 {
                    0
                } else {
                    (scroll_top / item_height as u64) as usize
                };
                let row_page = if item_height == 0 {
                    0
                } else {
                    (2 * container_height / item_height) as usize
                };
                let page = row_page * columns;

                // Snap the clamp to the start of the last row so the window
                // always begins at a row boundary, even for an out-of-range
                // scroll offset.
                let last_row_start = (last / columns) * columns;
                let start_index = (columns * row).min(last_row_start);
                let end_index = (start_index + 2 * page).min(last);
                Some(Window {
                    start_index,
                    end_index,
                    item_width,
                    item_height,
                    columns,
                })
            }
        }
    }
}
