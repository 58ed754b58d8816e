//! Browser `localStorage` persistence for the bearer token.
//!
//! The token is the only state that survives a reload. SSR paths no-op.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "lms_access_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token, ignoring blank values.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let token = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        if token.trim().is_empty() { None } else { Some(token) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
