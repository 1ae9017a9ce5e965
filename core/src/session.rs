use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory mapping from session id to the phone number it logged in with.
///
/// Handles are cheap to clone and share one underlying map, so the registry
/// can be owned by the application state and handed to every request worker.
/// The login flow writes, the tool endpoint reads. Entries never expire:
/// sessions live for the process, which is the intended behavior for a
/// development mock.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the mapping for `session_id`.
    ///
    /// There is no uniqueness check on `phone_number`: multiple sessions may
    /// map to the same identity.
    pub fn register(&self, session_id: &str, phone_number: &str) {
        let mut sessions = self.inner.write().unwrap_or_else(|e| e.into_inner());
        sessions.insert(session_id.to_string(), phone_number.to_string());
    }

    /// Look up the phone number bound to `session_id`.
    ///
    /// `None` means the client has not completed the login flow yet; callers
    /// treat it as a normal branch, not an error.
    pub fn resolve(&self, session_id: &str) -> Option<String> {
        let sessions = self.inner.read().unwrap_or_else(|e| e.into_inner());
        sessions.get(session_id).cloned()
    }
}
