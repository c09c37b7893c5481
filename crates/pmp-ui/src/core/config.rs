//! Endpoint configuration for the partner-manager service.
//!
//! # Design
//! - Resolve the base URL once at boot; everything else joins paths onto it.
//! - Keep resolution pure so the browser shell only supplies its origin.

/// Service prefix appended to the page origin when no base URL is configured.
pub const PARTNER_MANAGER_PREFIX: &str = "/v1/partnermanager";

/// Resolved console configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    partner_manager_base: String,
}

impl ConsoleConfig {
    /// Build a config around an explicit partner-manager base URL.
    #[must_use]
    pub fn new(partner_manager_base: impl Into<String>) -> Self {
        let base: String = partner_manager_base.into();
        Self {
            partner_manager_base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Pick the configured base URL when it is non-blank, otherwise derive one
    /// from the page origin.
    #[must_use]
    pub fn resolve(configured: Option<&str>, origin: &str) -> Self {
        match configured.map(str::trim).filter(|value| !value.is_empty()) {
            Some(base) => Self::new(base),
            None => Self::new(format!(
                "{}{PARTNER_MANAGER_PREFIX}",
                origin.trim().trim_end_matches('/')
            )),
        }
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn partner_manager_base(&self) -> &str {
        &self.partner_manager_base
    }

    /// Absolute URL for a service path, joined with exactly one slash.
    #[must_use]
    pub fn partner_manager_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.partner_manager_base,
            path.trim_start_matches('/')
        )
    }
}
