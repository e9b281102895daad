//! Shared test utilities for integration tests
//!
//! Tests that touch the real process environment go through `with_env_vars`,
//! which serializes access and restores the previous values afterwards.

use growi_config::config::ENV_VAR_SCHEMA;
use std::sync::Mutex;

/// Global mutex to serialize process environment access across all tests
static PROCESS_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with every schema variable cleared, then `vars` applied.
pub fn with_env_vars<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let _guard = PROCESS_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<(&str, Option<std::ffi::OsString>)> = ENV_VAR_SCHEMA
        .iter()
        .map(|spec| (spec.env_name, std::env::var_os(spec.env_name)))
        .collect();

    for spec in ENV_VAR_SCHEMA {
        std::env::remove_var(spec.env_name);
    }
    for (name, value) in vars {
        std::env::set_var(name, value);
    }

    let result = f();

    for (name, _) in vars {
        std::env::remove_var(name);
    }
    for (name, value) in saved {
        if let Some(value) = value {
            std::env::set_var(name, value);
        }
    }

    result
}
