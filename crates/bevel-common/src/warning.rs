//! Resolver warnings with colored terminal output.
//!
//! Provides deduplication so that a style document repeating the same
//! unsupported key across many elements only reports it once.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record `message` for `component`, returning whether it is new.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("document", "per-edge border style 'left' is not supported");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[Bevel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before loading a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
