//! Process-wide environment access.
//!
//! Reads and test-time mutations share one mutex: the std setters are
//! `unsafe` in edition 2024 because concurrent access is undefined.

use regex::Regex;
use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

static UTF8_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bUTF-?8\b").expect("valid regex"));

fn lock() -> MutexGuard<'static, ()> {
    // The guarded data is `()`, so a poisoned lock carries no broken state.
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read a UTF-8 environment variable, treating unset and non-Unicode values
/// alike.
pub fn var<K: AsRef<OsStr>>(key: K) -> Option<String> {
    let _guard = lock();
    env::var(key).ok()
}

/// Read an environment variable without requiring valid Unicode.
pub fn var_os<K: AsRef<OsStr>>(key: K) -> Option<OsString> {
    let _guard = lock();
    env::var_os(key)
}

/// Set an environment variable while holding the global lock.
pub fn set_var<K: AsRef<OsStr>, V: AsRef<OsStr>>(key: K, value: V) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::set_var(key, value) };
}

/// Remove an environment variable while holding the global lock.
pub fn remove_var<K: AsRef<OsStr>>(key: K) {
    let _guard = lock();
    // SAFETY: the mutex serialises access to the unsynchronised std env calls.
    unsafe { env::remove_var(key) };
}

/// Whether the terminal locale can render emoji status markers.
///
/// The first of `LC_ALL`, `LC_CTYPE` and `LANG` that is set decides.
#[must_use]
pub fn locale_is_utf8() -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(var)
        .is_some_and(|v| UTF8_RE.is_match(&v))
}
