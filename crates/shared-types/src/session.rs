use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// The authenticated actor, as returned by the login endpoint and persisted
/// in the durable session slot between page loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: i64,
    pub username: String,
    pub role: String,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// One durable string slot. The browser build backs this with localStorage;
/// everything else uses [`MemorySlot`].
pub trait SessionSlot {
    fn read(&self) -> Option<String>;
    fn write(&self, raw: &str);
    fn clear(&self);
}

/// In-memory adapter for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl SessionSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, raw: &str) {
        *self.value.borrow_mut() = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

/// Owning handle over the durable session slot.
///
/// The slot is read once at startup; login and logout write through
/// synchronously so a page reload always sees the latest state. A slot
/// holding anything that no longer parses as a [`Session`] reads as absent.
#[derive(Clone)]
pub struct SessionStore {
    slot: Rc<dyn SessionSlot>,
}

impl SessionStore {
    pub fn new(slot: Rc<dyn SessionSlot>) -> Self {
        Self { slot }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemorySlot::default()))
    }

    pub fn get(&self) -> Option<Session> {
        let raw = self.slot.read()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            self.slot.write(&raw);
        }
    }

    pub fn clear(&self) {
        self.slot.clear();
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee_session() -> Session {
        Session {
            id: 2,
            username: "jsmith".to_string(),
            role: "employee".to_string(),
            employee_id: Some(7),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn deserializes_admin_login_payload() {
        let session: Session = serde_json::from_str(
            r#"{"id":1,"username":"admin","role":"admin","employee_id":null,"created_at":"2023-01-01 09:00:00","updated_at":null}"#,
        )
        .unwrap();
        assert!(session.is_admin());
        assert_eq!(session.employee_id, None);
        assert_eq!(session.created_at.as_deref(), Some("2023-01-01 09:00:00"));
    }

    #[test]
    fn store_round_trips_a_session() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get(), None);

        let session = employee_session();
        store.set(&session);
        assert_eq!(store.get(), Some(session));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn set_writes_through_to_the_slot() {
        let slot = Rc::new(MemorySlot::default());
        let store = SessionStore::new(slot.clone());

        store.set(&employee_session());
        let raw = slot.read().unwrap();
        assert!(raw.contains("\"jsmith\""));

        store.clear();
        assert_eq!(slot.read(), None);
    }

    #[test]
    fn corrupt_slot_reads_as_absent() {
        let slot = Rc::new(MemorySlot::default());
        slot.write("not json at all");
        let store = SessionStore::new(slot);
        assert_eq!(store.get(), None);
    }
}
