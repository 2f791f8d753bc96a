//! Builder warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the CLI to report input that renders but may not be what the
//! author meant, such as tag names outside the standard catalog.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it is new.
///
/// Returns `true` the first time a given `component`/`message` pair is seen
/// and `false` for every repeat until [`clear_warnings`] is called.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn record_warning(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about ignored or unusual input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("render", "<myWidget> is not a standard tag");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    if record_warning(component, message) {
        eprintln!("{}", format!("[brick {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before rendering a new input)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
