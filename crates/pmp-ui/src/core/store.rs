//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Page-local form state stays in the page reducer; only what the shell
//!   must see (profile, navigation guard) lives here.

use crate::core::guard::NavigationGuard;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
#[cfg(target_arch = "wasm32")]
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Signed-in user's display preferences.
    pub profile: ProfileSlice,
    /// Unsaved-changes guard keyed by route path.
    pub navigation: NavigationGuard<String>,
}

/// Profile preferences that shape rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileSlice {
    /// Active locale; drives translations and text direction.
    pub locale: LocaleCode,
}

impl Default for ProfileSlice {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
        }
    }
}

/// Dispatch handle for the global store.
#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_is_clean_english() {
        let store = AppStore::default();
        assert_eq!(store.profile.locale, LocaleCode::En);
        assert!(!store.navigation.is_dirty());
        assert!(store.navigation.pending().is_none());
    }
}
