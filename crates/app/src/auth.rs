use dioxus::prelude::*;
use shared_types::{Session, SessionStore};

/// Global authentication state.
///
/// Every change to the signed-in user writes through to the session
/// store, so a page reload restores the same session.
#[derive(Clone)]
pub struct AuthState {
    pub current_user: Signal<Option<Session>>,
    store: SessionStore,
}

impl AuthState {
    /// Build the state from whatever session the store currently holds.
    pub fn restore(store: SessionStore) -> Self {
        let current_user = Signal::new(store.get());
        Self {
            current_user,
            store,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: Session) {
        self.store.set(&user);
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.store.clear();
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to check if the current user has the admin role.
pub fn use_is_admin() -> bool {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|user| user.is_admin()).unwrap_or(false)
}
