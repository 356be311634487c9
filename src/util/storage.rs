//! Browser `localStorage` access for persisted preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site persists a single preference flag. These helpers keep the
//! web-sys glue in one place so callers only deal with plain strings.
//! Storage can be unavailable (private mode, sandboxed frames); reads then
//! return `None` and writes are dropped.
//!
//! Native builds keep values in a per-thread map instead, so code that
//! persists through this module can be exercised under `cargo test`.

#[cfg(not(feature = "csr"))]
use std::cell::RefCell;
#[cfg(not(feature = "csr"))]
use std::collections::HashMap;

#[cfg(not(feature = "csr"))]
thread_local! {
    static MEMORY: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Read the raw string stored under `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with(|memory| memory.borrow().get(key).cloned())
    }
}

/// Write `value` under `key`.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "csr"))]
    {
        MEMORY.with(|memory| {
            memory.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}
