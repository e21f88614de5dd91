//! Platform-agnostic application bootstrap for the ETM diagnostics screen.
//!
//! Provides `EtmState` (view-model container) and `EtmStateBuilder` (adapter injection).

pub mod adapters;

use std::sync::Arc;

use etm_core::error::{CoreError, CoreResult};
use etm_core::traits::{AccountManager, PreferenceStore};
use etm_core::types::{default_pages, MenuEntry};
use etm_core::DiagnosticsViewModel;

/// Platform-agnostic diagnostics state.
///
/// Every frontend constructs this once per diagnostics session via `EtmStateBuilder`.
pub struct EtmState {
    /// Diagnostics view-model
    pub view_model: Arc<DiagnosticsViewModel>,
}

/// Builder for constructing `EtmState` with platform-specific adapters.
///
/// # Required adapters
/// - `preference_store` — where preferences are read from
/// - `account_manager` — where accounts and their user data are read from
///
/// # Optional
/// - `pages` — defaults to the preferences and accounts pages
pub struct EtmStateBuilder {
    preference_store: Option<Arc<dyn PreferenceStore>>,
    account_manager: Option<Arc<dyn AccountManager>>,
    pages: Option<Vec<MenuEntry>>,
}

impl EtmStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preference_store: None,
            account_manager: None,
            pages: None,
        }
    }

    #[must_use]
    pub fn preference_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preference_store = Some(store);
        self
    }

    #[must_use]
    pub fn account_manager(mut self, manager: Arc<dyn AccountManager>) -> Self {
        self.account_manager = Some(manager);
        self
    }

    #[must_use]
    pub fn pages(mut self, pages: Vec<MenuEntry>) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Build the `EtmState`.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if required adapters are missing.
    pub fn build(self) -> CoreResult<EtmState> {
        let preference_store = self
            .preference_store
            .ok_or_else(|| CoreError::Validation("preference_store is required".to_string()))?;
        let account_manager = self
            .account_manager
            .ok_or_else(|| CoreError::Validation("account_manager is required".to_string()))?;
        let pages = self.pages.unwrap_or_else(default_pages);

        log::debug!("Building diagnostics state with {} pages", pages.len());
        let view_model = Arc::new(DiagnosticsViewModel::with_pages(
            preference_store,
            account_manager,
            pages,
        ));

        Ok(EtmState { view_model })
    }
}

impl Default for EtmStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
