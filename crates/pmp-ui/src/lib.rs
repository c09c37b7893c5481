#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]
//! Partner-management console: the Yew front-end for generating partner API keys.
//!
//! Everything under [`core`], [`features`] and [`i18n`] is DOM-free and tested
//! natively; the app shell, components and HTTP services compile only for wasm32.

pub mod core;
pub mod features;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::validation::LABEL_MAX_LEN;
    use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};

    #[test]
    fn label_limit_matches_translated_message() {
        let bundle = TranslationBundle::new(DEFAULT_LOCALE);
        let message = bundle.text("generate_api_key.name_too_long", "");
        assert!(message.contains(&LABEL_MAX_LEN.to_string()));
    }
}
