use billed_store::SessionStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key under which the login flow stores the session.
pub const SESSION_KEY: &str = "user";

/// Role of the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// The authenticated user's role and identity. Created at login (out of
/// scope), read by every component here, never mutated by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub email: String,
}

impl Session {
    pub fn new(user_type: UserType, email: impl Into<String>) -> Self {
        Self {
            user_type,
            email: email.into(),
        }
    }

    /// Read the current session. A missing or corrupt record reads as
    /// "not logged in".
    pub fn load(store: &dyn SessionStore) -> Option<Self> {
        let raw = store.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(%err, "unreadable session record");
                None
            }
        }
    }

    /// Persist this session. Used by tests and the demo binary; the real
    /// login flow writes the same shape.
    pub fn save(&self, store: &dyn SessionStore) -> Result<(), serde_json::Error> {
        store.set(SESSION_KEY, &serde_json::to_string(self)?);
        Ok(())
    }
}
