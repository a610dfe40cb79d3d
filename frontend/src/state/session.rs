use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::storage as storage_utils;

/// Local storage key holding the bearer token.
pub const TOKEN_KEY: &str = "access_token";

/// Persistence backend for the bearer token.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn remove(&self);
}

/// Browser `localStorage`, keyed by [`TOKEN_KEY`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        let storage = storage_utils::local_storage().ok()?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let storage = storage_utils::local_storage()?;
        storage
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    fn remove(&self) {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

type Listener = Rc<dyn Fn(bool)>;

/// Owner of the bearer token. Cloning shares the same backing storage and
/// listener list, so every clone observes the same session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn TokenStorage>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl SessionStore {
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalTokenStorage)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStorage::default())
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(MemoryTokenStorage::with_token(token))
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.load().filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), String> {
        if token.trim().is_empty() {
            return Err("Refusing to store an empty access token".into());
        }
        self.storage.save(token)?;
        self.notify(true);
        Ok(())
    }

    pub fn clear_token(&self) {
        let had_token = self.is_authenticated();
        self.storage.remove();
        if had_token {
            log::info!("session cleared");
        }
        self.notify(false);
    }

    /// Registers `listener`, called with the authenticated flag after every
    /// `set_token` / `clear_token`.
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self, authenticated: bool) {
        // Snapshot so a listener may subscribe or touch the session re-entrantly.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(authenticated);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::in_memory()
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_session_is_unauthenticated() {
        let session = SessionStore::in_memory();
        assert!(session.get_token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn set_and_clear_token_round_trip() {
        let session = SessionStore::in_memory();
        session.set_token("tok1").unwrap();
        assert_eq!(session.get_token().as_deref(), Some("tok1"));

        session.clear_token();
        assert!(session.get_token().is_none());
    }

    #[test]
    fn clones_share_the_same_token() {
        let session = SessionStore::in_memory();
        let view_copy = session.clone();
        session.set_token("shared").unwrap();
        assert_eq!(view_copy.get_token().as_deref(), Some("shared"));
        view_copy.clear_token();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn empty_token_is_rejected() {
        let session = SessionStore::in_memory();
        assert!(session.set_token("   ").is_err());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn subscribers_observe_login_and_logout() {
        let session = SessionStore::in_memory();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        session.subscribe(move |authed| sink.borrow_mut().push(authed));

        session.set_token("abc").unwrap();
        session.clear_token();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn listener_may_read_session_while_notified() {
        let session = SessionStore::in_memory();
        let observed = Rc::new(Cell::new(false));
        let inner = session.clone();
        let flag = observed.clone();
        session.subscribe(move |_| flag.set(inner.is_authenticated()));

        session.set_token("abc").unwrap();
        assert!(observed.get());
    }
}
