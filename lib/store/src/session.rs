use std::collections::HashMap;
use std::sync::RwLock;

/// Durable key-value store for the authenticated session.
///
/// Values are JSON strings. The login flow (out of scope here) writes the
/// `"user"` key; this core only reads it back.
pub trait SessionStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a key-value pair, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// SessionStore backed by a process-local map. Stands in for the browser's
/// localStorage in tests and the demo binary.
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}
