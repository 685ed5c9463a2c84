//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, location) from page and
//! component logic so the session layer can be exercised without a browser.

pub mod auth;
pub mod browser;
