//! Session Persistence
//!
//! Optional browser capabilities the list loader persists through: a
//! session-scoped key-value store and the window's scroll offset. Both are
//! injected, so a loader built without them simply skips persistence.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid scroll offset: {0:?}")]
    InvalidScrollOffset(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Backend(format!("{:?}", value))
    }
}

/// Outcome of an operation whose failure is logged instead of returned.
///
/// Not `#[must_use]`: callers are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestEffort {
    /// The operation ran and succeeded
    Done,
    /// Nothing to do (capability missing or nothing stored)
    Skipped,
    /// The operation failed; the failure has been logged
    Failed,
}

/// Session-scoped string key-value store
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Window scroll access
pub trait Viewport {
    /// Current vertical scroll offset in pixels
    fn scroll_y(&self) -> Option<f64>;
    /// Scroll to `y` once `delay_ms` has passed
    fn scroll_to_later(&self, y: i32, delay_ms: u32);
}

pub fn read_json<T: DeserializeOwned>(
    store: &dyn SessionStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get_item(key)? {
        Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

pub fn write_json<T: Serialize>(
    store: &dyn SessionStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// Parse a stored scroll offset, accepting fractional pixels
pub fn parse_scroll_offset(raw: &str) -> Result<i32, StorageError> {
    let trimmed = raw.trim();
    if let Ok(y) = trimmed.parse::<i32>() {
        return Ok(y);
    }
    match trimmed.parse::<f64>() {
        Ok(y) if y.is_finite() => Ok(y.trunc() as i32),
        _ => Err(StorageError::InvalidScrollOffset(raw.to_string())),
    }
}

// ========================
// Browser Implementations
// ========================

/// `window.sessionStorage`
pub struct BrowserSessionStore(web_sys::Storage);

impl BrowserSessionStore {
    /// None outside a browser or when storage access is denied
    pub fn from_window() -> Option<Self> {
        web_sys::window()?
            .session_storage()
            .ok()
            .flatten()
            .map(BrowserSessionStore)
    }
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(self.0.set_item(key, value)?)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Ok(self.0.remove_item(key)?)
    }
}

pub struct BrowserViewport(web_sys::Window);

impl BrowserViewport {
    pub fn from_window() -> Option<Self> {
        web_sys::window().map(BrowserViewport)
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> Option<f64> {
        self.0.scroll_y().ok()
    }

    fn scroll_to_later(&self, y: i32, delay_ms: u32) {
        let window = self.0.clone();
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            window.scroll_to_with_x_and_y(0.0, f64::from(y));
        })
        .forget();
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemorySessionStore;
    use super::*;

    #[test]
    fn test_read_missing_key() {
        let store = MemorySessionStore::default();
        let value: Option<Vec<u32>> = read_json(&store, "missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_write_then_read_json() {
        let store = MemorySessionStore::default();
        write_json(&store, "numbers", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(store.raw("numbers").as_deref(), Some("[1,2,3]"));
        let value: Option<Vec<u32>> = read_json(&store, "numbers").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_read_corrupt_json() {
        let store = MemorySessionStore::default();
        store.set_item("numbers", "{not json").unwrap();
        let result: Result<Option<Vec<u32>>, _> = read_json(&store, "numbers");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_parse_scroll_offset() {
        assert_eq!(parse_scroll_offset("640").unwrap(), 640);
        assert_eq!(parse_scroll_offset("640.75").unwrap(), 640);
        assert!(parse_scroll_offset("top").is_err());
        assert!(parse_scroll_offset("NaN").is_err());
    }
}
