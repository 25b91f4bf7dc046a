use tracing::warn;

/// Holder of the single persisted bearer token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token kept in `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(&self.key).ok().flatten())
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(s) => {
                if s.set_item(&self.key, token).is_err() {
                    warn!("Failed to persist auth token");
                }
            }
            None => warn!("localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(s) = Self::storage() {
            let _ = s.remove_item(&self.key);
        }
    }
}
