//! A headless windowing calculator for virtualized lists and grids.
//!
//! For adapter-level utilities (event coalescing, slot reuse), see the
//! `windowing-adapter` crate.
//!
//! Virtualization renders only the visible subset of a large list while faking
//! the full scrollable extent. This crate computes the three things a host
//! needs for that: the total extent (to size the scrollbar spacer), the window
//! of item indexes that must be rendered for the current scroll offset, and
//! the resolved pixel height of the scrolling container.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - viewport dimensions (width/height), on mount and on every resize
//! - the current scroll offset, on every scroll event
//! - a [`Layout`] and total item count
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod height;
mod layout;
mod options;
mod types;
mod windower;

#[cfg(test)]
mod tests;

pub use height::{HeightProbe, HeightRule, resolve_container_height};
pub use layout::Layout;
pub use options::{OnChangeCallback, WindowerOptions};
pub use types::{Dimensions, ItemWidth, Window, WindowItem};
pub use windower::Windower;
