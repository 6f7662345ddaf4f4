use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A thread-safe store for a single piece of application state.
///
/// Stores hold one mutable slot plus an ordered list of observers. Writers
/// are serialized together with their notifications, so every observer sees
/// the same total order of values.
pub struct Store<T> {
    inner: Arc<StoreInner<T>>,
}

struct StoreInner<T> {
    state: RwLock<T>,
    observers: RwLock<Vec<(u64, Observer<T>)>>,
    // Held across a write and its notifications so notification order
    // matches write order.
    write_gate: Mutex<()>,
    next_observer_id: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial),
                observers: RwLock::new(Vec::new()),
                write_gate: Mutex::new(()),
                next_observer_id: AtomicU64::new(0),
            }),
        }
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.inner.state.read().unwrap().clone()
    }

    /// Read state without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.inner.state.read().unwrap();
        f(&state)
    }

    /// Set a new state value and notify observers.
    pub fn set(&self, new_state: T) {
        let _gate = self.inner.write_gate.lock().unwrap();
        *self.inner.state.write().unwrap() = new_state.clone();
        self.notify(&new_state);
    }

    /// Replace the state with `f(current)` and notify observers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let _gate = self.inner.write_gate.lock().unwrap();
        let next = {
            let state = self.inner.state.read().unwrap();
            f(&state)
        };
        *self.inner.state.write().unwrap() = next.clone();
        self.notify(&next);
    }

    /// Subscribe to state changes.
    ///
    /// The observer is called immediately with the current value, and again
    /// after every `set`/`update`, in registration order. Dropping the
    /// returned [`Subscription`] unregisters the observer.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_observer_id.fetch_add(1, Ordering::SeqCst);
        let observer: Observer<T> = Arc::new(observer);
        self.inner
            .observers
            .write()
            .unwrap()
            .push((id, Arc::clone(&observer)));

        // Replay the current value to the new observer.
        let current = self.get();
        observer(&current);

        let inner = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    if let Ok(mut observers) = inner.observers.write() {
                        observers.retain(|(observer_id, _)| *observer_id != id);
                    }
                }
            })),
        }
    }

    /// Notify all observers of a state change.
    fn notify(&self, value: &T) {
        // Snapshot the list so an observer may subscribe or unsubscribe
        // from within its callback without deadlocking.
        let observers: Vec<Observer<T>> = {
            let list = self.inner.observers.read().unwrap();
            list.iter().map(|(_, observer)| Arc::clone(observer)).collect()
        };
        for observer in &observers {
            observer(value);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// RAII guard for a store subscription.
///
/// The observer stays registered until the guard is dropped or the store
/// itself goes away.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Keep the observer registered for the life of the store.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
