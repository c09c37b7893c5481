//! Persistence and environment helpers for the app shell.

use crate::core::config::ConsoleConfig;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const LOCALE_KEY: &str = "pmp.locale";

const FALLBACK_ORIGIN: &str = "http://localhost:8080";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        console::error!(format!("failed to persist locale: {err}"));
    }
}

/// Service configuration from the build environment or the page origin.
pub(crate) fn console_config() -> ConsoleConfig {
    let origin = window().location().origin().unwrap_or_else(|_| {
        console::error!("page origin unavailable; using local fallback");
        FALLBACK_ORIGIN.to_string()
    });
    ConsoleConfig::resolve(option_env!("PMP_PARTNER_MANAGER_URL"), &origin)
}
