//! Registry of session-change listeners with explicit disposers.
//!
//! DESIGN
//! ======
//! The registry sits behind `Arc<Mutex<..>>` so a [`Subscription`] is
//! `Send + Sync` and can be moved into Leptos `on_cleanup`. Listeners are
//! invoked outside the lock, so a listener may unsubscribe itself or others
//! while an event is being delivered.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use super::types::AuthChange;

type Listener = Arc<dyn Fn(&AuthChange) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared set of listeners. Clones refer to the same set.
#[derive(Clone, Default)]
pub struct ListenerSet {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerSet {
    /// Register `listener`; it stays active until the returned subscription
    /// is unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&AuthChange) + Send + Sync + 'static) -> Subscription {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription { id, registry: Arc::downgrade(&self.inner) }
    }

    /// Deliver `change` to every listener registered at call time.
    pub fn emit(&self, change: &AuthChange) {
        let snapshot: Vec<Listener> = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in snapshot {
            listener(change);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to one registered listener.
///
/// Dropping a subscription does not unregister it; call
/// [`Subscription::unsubscribe`] when the owning view is torn down.
#[derive(Debug)]
#[must_use = "call `unsubscribe` on teardown"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Remove the listener. A no-op if the registry is already gone.
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
