use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type IndexSlotMap = HashMap<usize, usize>;
#[cfg(not(feature = "std"))]
type IndexSlotMap = BTreeMap<usize, usize>;

use windowing::Window;

/// A change to the index→slot assignment produced by [`Slots::sync`].
///
/// Slots stand in for whatever the host reuses across renders: pooled DOM
/// nodes, retained widgets, row buffers. A `Keep` means the item can be left
/// exactly as it was (modulo repositioning); a `Mount` means the slot's
/// content must be replaced with the new item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotChange {
    /// `index` left the window; its slot is now free.
    Unmount { slot: usize, index: usize },
    /// `index` was already assigned to `slot` and stays there.
    Keep { slot: usize, index: usize },
    /// `index` entered the window and was assigned `slot`.
    Mount { slot: usize, index: usize },
}

/// A stable index→slot mapping for item reuse across window shifts.
///
/// When the window moves by a small delta, the overlapping indexes keep their
/// slots; departed indexes free theirs, and arriving indexes fill freed slots
/// before new ones are allocated. Slot ids are dense and only grow to the
/// largest window size seen.
#[derive(Clone, Debug, Default)]
pub struct Slots {
    /// Slot id → occupying item index.
    index_of: Vec<Option<usize>>,
    slot_of: IndexSlotMap,
    free: Vec<usize>,
}

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slot_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slot_of.is_empty()
    }

    /// Total number of slots ever allocated (occupied + free).
    pub fn capacity(&self) -> usize {
        self.index_of.len()
    }

    /// The slot currently assigned to `index`, if any.
    pub fn slot_of(&self, index: usize) -> Option<usize> {
        self.slot_of.get(&index).copied()
    }

    /// The item index occupying `slot`, if any.
    pub fn index_of(&self, slot: usize) -> Option<usize> {
        self.index_of.get(slot).copied().flatten()
    }

    /// Reconciles the assignment with a new window and reports every change.
    ///
    /// Emits `Unmount`s first (in ascending slot order), then `Keep`/`Mount`
    /// in window order. Pass `None` to tear everything down.
    pub fn sync(&mut self, window: Option<&Window>, mut f: impl FnMut(SlotChange)) {
        // Free slots whose index fell out of the window.
        for slot in 0..self.index_of.len() {
            let Some(index) = self.index_of[slot] else {
                continue;
            };
            if window.is_some_and(|w| w.contains(index)) {
                continue;
            }
            self.index_of[slot] = None;
            self.slot_of.remove(&index);
            self.free.push(slot);
            f(SlotChange::Unmount { slot, index });
        }

        let Some(window) = window else {
            return;
        };

        for index in window.indices() {
            if let Some(&slot) = self.slot_of.get(&index) {
                f(SlotChange::Keep { slot, index });
                continue;
            }
            let slot = match self.free.pop() {
                Some(slot) => slot,
                None => {
                    self.index_of.push(None);
                    self.index_of.len() - 1
                }
            };
            self.index_of[slot] = Some(index);
            self.slot_of.insert(index, slot);
            f(SlotChange::Mount { slot, index });
        }
    }

    /// Releases every assignment without emitting changes.
    pub fn clear(&mut self) {
        self.index_of.clear();
        self.slot_of.clear();
        self.free.clear();
    }
}
