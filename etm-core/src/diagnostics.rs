//! Diagnostics view-model
//!
//! Holds the page-navigation state of the diagnostics screen and computes the
//! preference and account snapshots on demand.
//!
//! Navigation is a two-state machine:
//!
//! ```text
//!   AtRoot --select(valid i)--> OnPage(i)
//!   OnPage --select(valid j)--> OnPage(j)
//!   OnPage --back (true)------> AtRoot
//!   AtRoot --back (false)-----> AtRoot
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::CoreResult;
use crate::observable::LiveValue;
use crate::traits::{AccountManager, PreferenceStore};
use crate::types::{default_pages, AccountData, MenuEntry, PageId, ACCOUNT_USER_DATA_KEYS};

/// Where the diagnostics screen currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationState {
    /// No page selected
    AtRoot,
    /// A page is shown
    OnPage(PageId),
}

/// Diagnostics view-model
pub struct DiagnosticsViewModel {
    preference_store: Arc<dyn PreferenceStore>,
    account_manager: Arc<dyn AccountManager>,
    pages: Vec<MenuEntry>,
    current_page: LiveValue<Option<MenuEntry>>,
}

impl DiagnosticsViewModel {
    /// Create a view-model with the default page list
    #[must_use]
    pub fn new(
        preference_store: Arc<dyn PreferenceStore>,
        account_manager: Arc<dyn AccountManager>,
    ) -> Self {
        Self::with_pages(preference_store, account_manager, default_pages())
    }

    #[must_use]
    pub fn with_pages(
        preference_store: Arc<dyn PreferenceStore>,
        account_manager: Arc<dyn AccountManager>,
        pages: Vec<MenuEntry>,
    ) -> Self {
        Self {
            preference_store,
            account_manager,
            pages,
            current_page: LiveValue::new(None),
        }
    }

    // ===== Navigation =====

    pub fn pages(&self) -> &[MenuEntry] {
        &self.pages
    }

    pub fn current_page(&self) -> Option<MenuEntry> {
        self.current_page.get()
    }

    /// Receiver notified on every change of the current page
    pub fn subscribe_current_page(&self) -> watch::Receiver<Option<MenuEntry>> {
        self.current_page.subscribe()
    }

    pub fn navigation_state(&self) -> NavigationState {
        match self.current_page() {
            Some(entry) => NavigationState::OnPage(entry.id),
            None => NavigationState::AtRoot,
        }
    }

    pub fn is_at_root(&self) -> bool {
        self.navigation_state() == NavigationState::AtRoot
    }

    /// Show the page at `index`.
    ///
    /// An index past the end is ignored: the host UI may still hold an index
    /// from a page list it rendered earlier.
    pub fn on_page_selected(&self, index: usize) {
        match self.pages.get(index) {
            Some(entry) => {
                log::debug!("Diagnostics page selected: {}", entry.title);
                self.current_page.set(Some(entry.clone()));
            }
            None => {
                log::debug!(
                    "Ignoring diagnostics page index {index} (only {} pages)",
                    self.pages.len()
                );
            }
        }
    }

    /// Handle a back action.
    ///
    /// Returns `true` when a page was open and has been closed, `false` when
    /// already at the root and the host should handle back itself.
    pub fn on_back_pressed(&self) -> bool {
        if self.current_page().is_some() {
            log::debug!("Diagnostics back to root");
            self.current_page.set(None);
            true
        } else {
            false
        }
    }

    // ===== Snapshots =====

    /// All preferences as strings, sorted by key
    pub fn preferences(&self) -> CoreResult<BTreeMap<String, String>> {
        Ok(self
            .preference_store
            .get_all()?
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect())
    }

    /// Every registered account with its recognized user data
    pub fn accounts(&self) -> CoreResult<Vec<AccountData>> {
        self.account_manager
            .accounts()?
            .into_iter()
            .map(|account| -> CoreResult<AccountData> {
                let user_data = ACCOUNT_USER_DATA_KEYS
                    .iter()
                    .map(|key| {
                        self.account_manager
                            .user_data(&account, key)
                            .map(|value| ((*key).to_string(), value))
                    })
                    .collect::<CoreResult<BTreeMap<_, _>>>()?;
                Ok(AccountData { account, user_data })
            })
            .collect()
    }
}
