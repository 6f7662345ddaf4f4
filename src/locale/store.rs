use super::Locale;
use crate::store::{Store, Subscription};
use std::sync::Arc;
use tracing::debug;

type SyncHook = Arc<dyn Fn(Locale) + Send + Sync>;

/// Store for the currently selected UI language.
///
/// Every change is pushed to the localization runtime through the sync hook
/// before observers are notified, so a translation lookup performed inside
/// an observer already resolves in the new language. No reload is involved.
pub struct LocaleStore {
    store: Store<Locale>,
    sync: Option<SyncHook>,
}

impl LocaleStore {
    /// Create a store that reports every change to the given runtime hook.
    pub fn new<F>(sync: F) -> Self
    where
        F: Fn(Locale) + Send + Sync + 'static,
    {
        Self {
            store: Store::new(Locale::default()),
            sync: Some(Arc::new(sync)),
        }
    }

    /// Create a store with no localization runtime attached.
    pub fn detached() -> Self {
        Self {
            store: Store::new(Locale::default()),
            sync: None,
        }
    }

    /// The currently selected language.
    pub fn get(&self) -> Locale {
        self.store.get()
    }

    /// Select a new language.
    pub fn set(&self, locale: Locale) {
        self.update(move |_| locale);
    }

    /// Replace the language with `f(current)`.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(Locale) -> Locale,
    {
        let sync = self.sync.clone();
        self.store.update(move |current| {
            let next = f(*current);
            debug!(locale = %next, "locale changed");
            if let Some(sync) = &sync {
                sync(next);
            }
            next
        });
    }

    /// Subscribe to language changes.
    ///
    /// The observer is called immediately with the current language and on
    /// every subsequent change.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Locale) + Send + Sync + 'static,
    {
        self.store.subscribe(observer)
    }
}
