//! Parse warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the fragment tokenizer and tree builder to report recoverable
//! anomalies in trusted input (stray end tags, unclosed elements).

use std::collections::HashSet;
use std::sync::Mutex;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a recoverable anomaly (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML", "stray end tag </span> with no matching open element");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{YELLOW}[Willow {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call between independent conversions)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_and_clear_do_not_panic() {
        warn_once("Test", "repeated message");
        warn_once("Test", "repeated message");
        clear_warnings();
        warn_once("Test", "repeated message");
    }
}
