//! Persistent session store backed by browser local storage.
//!
//! Presence of a stored user is the sole gate for protected views: there is
//! no expiry and no signature, so any stored value that parses as a
//! [`User`] is trusted at face value. Storage is shared across all tabs of
//! the same origin and survives page reloads until [`clear`] runs.

use gloo_storage::{LocalStorage, Storage};
use shared::models::User;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

const USER_KEY: &str = "user";
const USER_ID_KEY: &str = "user_id";

/// Persist the authenticated user and the derived id key.
///
/// A failed write (quota, disabled storage) leaves the previous keys in
/// place; it is logged but not surfaced, since the in-memory session still
/// works for the current tab.
pub fn set(user: &User) {
    if let Err(err) = LocalStorage::set(USER_KEY, user) {
        log(std::format!("Failed to persist session user: {err}").as_str());
    }
    if let Err(err) = LocalStorage::set(USER_ID_KEY, user.id) {
        log(std::format!("Failed to persist session user id: {err}").as_str());
    }
}

/// Read the stored session, or `None` when no user is stored.
pub fn get() -> Option<User> {
    LocalStorage::get(USER_KEY).ok()
}

/// Read the stored user id without deserializing the full user.
pub fn user_id() -> Option<i64> {
    LocalStorage::get(USER_ID_KEY).ok()
}

/// Remove all session keys. Logout teardown.
pub fn clear() {
    LocalStorage::delete(USER_KEY);
    LocalStorage::delete(USER_ID_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            age: 34,
        }
    }

    #[wasm_bindgen_test]
    fn test_session_roundtrip() {
        clear();
        let user = sample_user();
        set(&user);
        assert_eq!(get(), Some(user));
    }

    #[wasm_bindgen_test]
    fn test_session_reads_are_idempotent() {
        clear();
        set(&sample_user());
        let first = get();
        let second = get();
        assert_eq!(first, second);
    }

    #[wasm_bindgen_test]
    fn test_user_id_matches_stored_user() {
        clear();
        set(&sample_user());
        assert_eq!(user_id(), Some(1));
    }

    #[wasm_bindgen_test]
    fn test_clear_removes_all_keys() {
        set(&sample_user());
        clear();
        assert_eq!(get(), None);
        assert_eq!(user_id(), None);
    }

    #[wasm_bindgen_test]
    fn test_absent_session_is_none() {
        clear();
        assert_eq!(get(), None);
    }
}
