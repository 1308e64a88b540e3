//! Durable session storage for the running platform.

use shared_types::SessionStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use shared_types::SessionSlot;

    /// Key under which the serialized session lives in browser storage.
    const SESSION_STORAGE_KEY: &str = "user";

    /// Slot backed by `window.localStorage`. Storage failures (private
    /// browsing, quota) degrade to an in-memory session for the tab.
    pub struct LocalStorageSlot;

    impl LocalStorageSlot {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl SessionSlot for LocalStorageSlot {
        fn read(&self) -> Option<String> {
            Self::storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()
        }

        fn write(&self, raw: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(SESSION_STORAGE_KEY, raw);
            }
        }

        fn clear(&self) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
}

/// Build the session store for this target: browser local storage on
/// wasm, an in-memory slot everywhere else.
pub fn session_store() -> SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        SessionStore::new(std::rc::Rc::new(browser::LocalStorageSlot))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionStore::in_memory()
    }
}
