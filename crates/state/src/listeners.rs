//! Subscription mechanics shared by the stores.
//!
//! A deliberately small publish/subscribe primitive: subscribers register a
//! callback and hold a handle; dropping (or explicitly unsubscribing) the
//! handle detaches the callback. No async, no framework change detection.
//!
//! Callbacks are invoked after the publishing store has released its state
//! lock, so a callback may freely read the store again. Callbacks run on
//! the publishing call stack — the model is a single-threaded UI event
//! loop, not a worker pool.

use std::sync::{Arc, Mutex, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Entry<T> {
    id: u64,
    callback: Callback<T>,
}

/// Registered observers of one store.
pub struct Listeners<T> {
    entries: Arc<Mutex<Vec<Entry<T>>>>,
    next_id: Mutex<u64>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback`; it fires on every subsequent publish until the
    /// returned handle is dropped or unsubscribed.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionHandle
    where
        T: 'static,
    {
        let id = {
            let mut next = self.next_id.lock().unwrap_or_else(|e| e.into_inner());
            *next += 1;
            *next
        };

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Entry {
                id,
                callback: Arc::new(callback),
            });
        }

        let weak: Weak<Mutex<Vec<Entry<T>>>> = Arc::downgrade(&self.entries);
        SubscriptionHandle {
            cancel: Some(Box::new(move || {
                if let Some(entries) = weak.upgrade() {
                    if let Ok(mut entries) = entries.lock() {
                        entries.retain(|entry| entry.id != id);
                    }
                }
            })),
        }
    }

    /// Deliver `value` to every live subscriber.
    ///
    /// Callbacks are cloned out of the registry first so a callback that
    /// subscribes or unsubscribes re-entrantly cannot deadlock the lock.
    pub fn notify(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = match self.entries.lock() {
            Ok(entries) => entries.iter().map(|entry| entry.callback.clone()).collect(),
            Err(_) => return,
        };

        for callback in callbacks {
            callback(value);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            next_id: Mutex::new(0),
        }
    }
}

/// Handle returned by [`Listeners::subscribe`].
///
/// Unsubscribes when dropped; `unsubscribe()` is the explicit spelling.
pub struct SubscriptionHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl core::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}
