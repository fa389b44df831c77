//! Host-side adapter utilities for the `windowing` crate.
//!
//! The `windowing` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly needed
//! by hosts:
//!
//! - An observer/listener abstraction for discrete resize/scroll/measurement
//!   events (register a handler, receive events, unregister on teardown)
//! - A controller that coalesces rapid successive events to the most recent
//!   value before recomputing, and reports only actual window changes
//! - A stable index→slot mapping so previously rendered items are reused
//!   rather than recreated when the window shifts by a small delta
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod events;
mod slots;


pub use controller::Controller;
pub use events::{HostEvent, Listeners, Subscription};
pub use slots::{SlotChange, Slots};
