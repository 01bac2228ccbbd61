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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Heft web UI.
//!
//! The crate holds the Yew front-end entrypoint (landing page and size limits
//! view) together with the DOM-free settings and threshold logic it renders.
//! Everything under [`core`] and [`i18n`] builds and tests on native targets.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::landing::LandingSection;
    use crate::core::thresholds::{DEFAULT_SIZE_THRESHOLDS, size_thresholds_from_settings};
    use crate::i18n::{LocaleCode, TranslationBundle};
    use std::collections::BTreeMap;

    #[test]
    fn every_landing_section_has_english_copy() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        for section in LandingSection::all() {
            assert_ne!(bundle.text(section.title_key(), ""), "");
        }
    }

    #[test]
    fn empty_settings_fall_back_to_defaults() {
        assert_eq!(
            size_thresholds_from_settings(&BTreeMap::new()),
            DEFAULT_SIZE_THRESHOLDS
        );
    }
}
