//! Browser-backed storage and navigation for the session controller.
//!
//! TRADE-OFFS
//! ==========
//! Both types are zero-sized and look up `window` on every call, which keeps
//! them `Send + Sync` as the controller requires. Outside the `hydrate`
//! build there is no browser: storage reports itself unavailable and
//! navigation is a no-op, keeping server rendering deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::cell::Cell;

use vendorhub::{Destination, DurableStorage, Navigator, StorageError};

thread_local! {
    /// Set once a full-page navigation has been issued for this document.
    static LEAVING: Cell<bool> = const { Cell::new(false) };
}

/// Whether a full-page navigation is already underway. Router redirects
/// issued after that point would only race the page unload.
pub fn page_is_leaving() -> bool {
    LEAVING.with(Cell::get)
}

/// Record that this document is being replaced.
pub fn mark_leaving() {
    LEAVING.with(|leaving| leaving.set(true));
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_owned())),
        Err(e) => Err(StorageError::Unavailable(format!("{e:?}"))),
    }
}

#[cfg(feature = "hydrate")]
fn js_error(e: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{e:?}"))
}

#[cfg(feature = "hydrate")]
impl DurableStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(|e| js_error(&e))
    }
}

#[cfg(not(feature = "hydrate"))]
fn no_browser() -> StorageError {
    StorageError::Unavailable("not running in a browser".to_owned())
}

#[cfg(not(feature = "hydrate"))]
impl DurableStorage for LocalStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(no_browser())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(no_browser())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(no_browser())
    }
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    #[cfg(feature = "hydrate")]
    fn navigate(&self, destination: Destination) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.location().set_href(destination.path()) {
            Ok(()) => mark_leaving(),
            Err(e) => log::warn!("navigation to {} failed: {e:?}", destination.path()),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn navigate(&self, _destination: Destination) {}
}
