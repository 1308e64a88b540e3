use std::rc::Rc;

use shared_types::{MemorySlot, SessionSlot, SessionStore};

use crate::common;

/// Slot that accepts nothing, like localStorage in a private browsing
/// session. Writes vanish and reads always come back empty.
struct DisabledSlot;

impl SessionSlot for DisabledSlot {
    fn read(&self) -> Option<String> {
        None
    }

    fn write(&self, _raw: &str) {}

    fn clear(&self) {}
}

#[test]
fn test_session_survives_a_reload() {
    let slot = Rc::new(MemorySlot::default());

    // First page load: log in.
    let store = SessionStore::new(slot.clone());
    store.set(&common::employee_session(7));

    // Reload: a fresh store over the same slot restores the session.
    let reloaded = SessionStore::new(slot);
    let session = reloaded.get().expect("session should survive the reload");
    assert_eq!(session.username, "alice");
    assert_eq!(session.employee_id, Some(7));
    assert!(!session.is_admin());
}

#[test]
fn test_logout_clears_the_slot_for_future_loads() {
    let slot = Rc::new(MemorySlot::default());

    let store = SessionStore::new(slot.clone());
    store.set(&common::admin_session());
    store.clear();

    let reloaded = SessionStore::new(slot);
    assert_eq!(reloaded.get(), None, "cleared slot should read as logged out");
}

#[test]
fn test_admin_payload_round_trips_with_null_employee_id() {
    let slot = Rc::new(MemorySlot::default());

    let store = SessionStore::new(slot.clone());
    store.set(&common::admin_session());

    let restored = SessionStore::new(slot)
        .get()
        .expect("admin session should round trip");
    assert!(restored.is_admin());
    assert_eq!(restored.employee_id, None);
    assert_eq!(restored.created_at.as_deref(), Some("2023-01-01 08:00:00"));
    assert_eq!(restored.updated_at, None);
}

#[test]
fn test_unparseable_slot_contents_gate_back_to_login() {
    let slot = Rc::new(MemorySlot::default());
    // A payload from an older build that no longer matches the session shape.
    slot.write(r#"{"user_id": 1, "name": "admin"}"#);

    let store = SessionStore::new(slot);
    assert_eq!(store.get(), None, "stale schema should read as absent");
}

#[test]
fn test_store_tolerates_a_slot_that_cannot_persist() {
    let store = SessionStore::new(Rc::new(DisabledSlot));

    store.set(&common::employee_session(7));
    assert_eq!(store.get(), None, "writes to a disabled slot are dropped");

    // Clearing an already-empty slot is a no-op, not a failure.
    store.clear();
    assert_eq!(store.get(), None);
}
