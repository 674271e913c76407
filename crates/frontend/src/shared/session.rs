use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::storage::{
    load_json, save_json, user_profile_key, BrowserStorage, StoragePort, KEY_CURRENT_USER,
    KEY_CURRENT_USER_EMAIL,
};

/// The signed-in user. There is no authentication; this is a display
/// preference restored from localStorage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
    /// "admin", "receptionist" or "customer".
    pub role: String,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<CurrentUser>>,
}

impl SessionContext {
    pub fn load() -> Self {
        let user = load_json::<CurrentUser>(&BrowserStorage, KEY_CURRENT_USER);
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn sign_in(&self, user: CurrentUser) {
        save_json(&BrowserStorage, KEY_CURRENT_USER, &user);
        BrowserStorage.set(KEY_CURRENT_USER_EMAIL, &user.email);
        save_json(&BrowserStorage, &user_profile_key(&user.email), &user);
        self.user.set(Some(user));
    }

    pub fn sign_out(&self) {
        BrowserStorage.remove(KEY_CURRENT_USER);
        BrowserStorage.remove(KEY_CURRENT_USER_EMAIL);
        self.user.set(None);
    }
}
