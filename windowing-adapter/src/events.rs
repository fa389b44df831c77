use alloc::sync::Arc;
use alloc::vec::Vec;

use windowing::{Dimensions, HeightProbe};

/// A discrete measurement event produced by the host's subscription layer.
///
/// The host observes its UI (resize observers, scroll handlers, layout
/// probes) and forwards the resulting values as plain data. The adapter layer
/// carries no implicit lifecycle coupling to any component tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostEvent {
    /// The viewport was resized.
    Resized(Dimensions),
    /// The container was scrolled to the given offset.
    Scrolled(u64),
    /// The container's surroundings were re-measured.
    Measured(HeightProbe),
}

/// A handle returned by [`Listeners::subscribe`], used to unregister the
/// handler on teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(usize);

/// A minimal listener registry for discrete events.
///
/// Handlers are invoked in subscription order. Unsubscribing leaves a hole
/// rather than shifting later handles.
pub struct Listeners<E> {
    handlers: Vec<Option<Arc<dyn Fn(&E) + Send + Sync>>>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Registers a handler and returns its subscription handle.
    pub fn subscribe(&mut self, handler: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let id = self.handlers.len();
        self.handlers.push(Some(Arc::new(handler)));
        Subscription(id)
    }

    /// Unregisters a handler. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match self.handlers.get_mut(subscription.0) {
            Some(slot @ Some(_)) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Delivers an event to every registered handler.
    pub fn emit(&self, event: &E) {
        for handler in self.handlers.iter().flatten() {
            handler(event);
        }
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
