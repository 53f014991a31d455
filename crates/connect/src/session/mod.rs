//! Session credential storage.
//!
//! Credentials live in an opaque key-value store supplied by the host
//! (browser storage, OS keychain, an in-memory map in tests). This
//! module owns the key names and the teardown helper; it never inspects
//! token contents.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key for the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "aluma_access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "aluma_refresh_token";

/// Storage key for the cached user profile JSON.
pub const USER_KEY: &str = "aluma_user";

/// Storage key for the generated device identifier. Survives logout.
pub const DEVICE_ID_KEY: &str = "deviceId";

/// Opaque string key-value store for session credentials.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The bearer token for the current session, if one is stored.
pub fn access_token(store: &dyn SessionStore) -> Option<String> {
    store.get(ACCESS_TOKEN_KEY)
}

/// Removes every credential key. Called on logout and on auth expiry;
/// the device id is deliberately left behind.
pub fn clear_session(store: &dyn SessionStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
    store.remove(USER_KEY);
}

/// In-process [`SessionStore`] for desktop embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        store.set(ACCESS_TOKEN_KEY, "tok");
        assert_eq!(access_token(&store).as_deref(), Some("tok"));
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_clear_session_keeps_device_id() {
        let store = MemorySessionStore::new();
        store.set(ACCESS_TOKEN_KEY, "a");
        store.set(REFRESH_TOKEN_KEY, "r");
        store.set(USER_KEY, "{}");
        store.set(DEVICE_ID_KEY, "device_x");

        clear_session(&store);

        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
        assert_eq!(store.get(DEVICE_ID_KEY).as_deref(), Some("device_x"));
    }
}
