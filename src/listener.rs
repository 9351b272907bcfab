//! Process-wide registry of outside-press listeners.
//!
//! A widget that closes on a press elsewhere on screen must only react while
//! it is mounted. [`ListenerGuard::register`] records a live listener and the
//! returned guard removes it again when dropped, so a torn-down widget can
//! never react to a press, and no entry outlives the widget that owns it.
//! A widget counts as mounted only while its listener is registered.
//!
//! ```rust
//! use location_autocomplete::listener::{self, ListenerGuard};
//!
//! let guard = ListenerGuard::register();
//! let id = guard.id();
//! assert!(listener::is_registered(id));
//! drop(guard);
//! assert!(!listener::is_registered(id));
//! ```

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

static REGISTRY: Lazy<Mutex<HashSet<usize>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

fn with_registry<R>(f: impl FnOnce(&mut HashSet<usize>) -> R) -> R {
    // A poisoned lock still holds a consistent set of ids.
    let mut set = REGISTRY.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut set)
}

/// Keeps one listener registered for as long as it lives.
#[derive(Debug)]
pub struct ListenerGuard {
    id: usize,
}

impl ListenerGuard {
    /// Registers a new listener.
    pub fn register() -> Self {
        let id = next_id();
        let live = with_registry(|set| {
            set.insert(id);
            set.len()
        });
        tracing::debug!(id, live, "outside-press listener registered");
        Self { id }
    }

    /// The listener id.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether this listener is still registered.
    pub fn is_active(&self) -> bool {
        is_registered(self.id)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let live = with_registry(|set| {
            set.remove(&self.id);
            set.len()
        });
        tracing::debug!(id = self.id, live, "outside-press listener removed");
    }
}

/// Whether the listener with `id` is registered.
pub fn is_registered(id: usize) -> bool {
    with_registry(|set| set.contains(&id))
}
