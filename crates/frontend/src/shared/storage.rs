//! Storage port over browser localStorage.
//!
//! All persisted preference/profile state goes through [`StoragePort`] so
//! components never touch `web_sys::Storage` directly and the port can be
//! swapped for a real persistence layer later.

use web_sys::window;

pub const KEY_INVENTORY: &str = "hotel_inventory";
pub const KEY_CURRENT_USER: &str = "currentUser";
pub const KEY_CURRENT_USER_EMAIL: &str = "currentUserEmail";

/// Per-user profile blob key.
pub fn user_profile_key(email: &str) -> String {
    format!("user_{email}")
}

pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed implementation. Every operation degrades to a
/// no-op when the window or storage is unavailable.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// Load a JSON blob through the port.
pub fn load_json<T: serde::de::DeserializeOwned>(port: &impl StoragePort, key: &str) -> Option<T> {
    port.get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Save a JSON blob through the port. Serialization failures are logged
/// and dropped; preference state is never worth crashing the page for.
pub fn save_json<T: serde::Serialize>(port: &impl StoragePort, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => port.set(key, &raw),
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::session::CurrentUser;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl StoragePort for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    #[test]
    fn profile_key_embeds_the_email() {
        assert_eq!(user_profile_key("ava@example.com"), "user_ava@example.com");
    }

    #[test]
    fn session_round_trips_through_the_port() {
        let port = MemoryStorage::default();
        let user = CurrentUser {
            name: "Front Desk".into(),
            email: "frontdesk@grandmeridian.example".into(),
            role: "receptionist".into(),
        };
        save_json(&port, KEY_CURRENT_USER, &user);
        port.set(KEY_CURRENT_USER_EMAIL, &user.email);
        save_json(&port, &user_profile_key(&user.email), &user);

        assert_eq!(load_json::<CurrentUser>(&port, KEY_CURRENT_USER), Some(user.clone()));
        assert_eq!(port.get(KEY_CURRENT_USER_EMAIL).as_deref(), Some(user.email.as_str()));
        assert_eq!(
            load_json::<CurrentUser>(&port, &user_profile_key(&user.email)),
            Some(user.clone()),
        );

        port.remove(KEY_CURRENT_USER);
        port.remove(KEY_CURRENT_USER_EMAIL);
        assert_eq!(load_json::<CurrentUser>(&port, KEY_CURRENT_USER), None);
        // the per-email profile survives sign-out
        assert!(port.get(&user_profile_key(&user.email)).is_some());
    }
}
