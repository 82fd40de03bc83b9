//! Key/value persistence for the session token.
//!
//! The browser build uses `localStorage`; native builds (unit tests, SSR
//! rendering) keep values in a thread-local map so the same code paths run.

pub const ACCESS_TOKEN_KEY: &str = "threebus_access_token";

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::{Storage, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| format!("Failed to store {}", key))
    }

    pub fn remove(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::{cell::RefCell, collections::HashMap};

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

pub fn access_token() -> Option<String> {
    backend::get(ACCESS_TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

pub fn store_access_token(token: &str) -> Result<(), String> {
    backend::set(ACCESS_TOKEN_KEY, token)
}

pub fn clear_access_token() {
    backend::remove(ACCESS_TOKEN_KEY);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_and_clears() {
        clear_access_token();
        assert!(access_token().is_none());

        store_access_token("abc.def.ghi").unwrap();
        assert_eq!(access_token().as_deref(), Some("abc.def.ghi"));

        clear_access_token();
        assert!(access_token().is_none());
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        store_access_token("  ").unwrap();
        assert!(access_token().is_none());
        clear_access_token();
    }
}
