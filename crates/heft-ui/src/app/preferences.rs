//! Persistence and environment helpers for the app shell.

use crate::core::logic::{FALLBACK_API_BASE, api_base_from_location, normalize_api_base};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "heft.locale";
pub(crate) const API_BASE_KEY: &str = "heft.api_base";

/// Stored locale first, then the browser language, then English.
pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(stored) = LocalStorage::get::<String>(LOCALE_KEY)
        && let Some(locale) = LocaleCode::from_lang_tag(&stored)
    {
        return locale;
    }
    if let Some(tag) = window().navigator().language()
        && let Some(locale) = LocaleCode::from_lang_tag(&tag)
    {
        return locale;
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// API base URL: explicit `heft.api_base` override first, then the page origin.
pub(crate) fn api_base_url() -> String {
    if let Some(base) = LocalStorage::get::<String>(API_BASE_KEY)
        .ok()
        .and_then(|value| normalize_api_base(&value))
    {
        return base;
    }

    let location = window().location();
    match (location.protocol(), location.hostname(), location.port()) {
        (Ok(protocol), Ok(host), Ok(port)) => api_base_from_location(&protocol, &host, &port),
        _ => FALLBACK_API_BASE.to_string(),
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
