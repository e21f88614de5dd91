//! In-memory account manager.

use std::collections::HashMap;
use std::sync::RwLock;

use etm_core::error::{CoreError, CoreResult};
use etm_core::traits::AccountManager;
use etm_core::types::AccountHandle;

use super::poisoned;

#[derive(Default)]
struct Registry {
    /// Registration order is the enumeration order
    accounts: Vec<AccountHandle>,
    user_data: HashMap<AccountHandle, HashMap<String, String>>,
}

/// Account manager kept in process memory.
#[derive(Default)]
pub struct InMemoryAccountManager {
    registry: RwLock<Registry>,
}

impl InMemoryAccountManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account. Registering the same handle twice is a no-op.
    pub fn add_account(&self, account: AccountHandle) -> CoreResult<()> {
        let mut registry = self.registry.write().map_err(poisoned)?;
        if !registry.accounts.contains(&account) {
            registry.accounts.push(account);
        }
        Ok(())
    }

    /// Set one user-data value of a registered account.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` if the account is not registered.
    pub fn set_user_data(&self, account: &AccountHandle, key: &str, value: &str) -> CoreResult<()> {
        let mut registry = self.registry.write().map_err(poisoned)?;
        if !registry.accounts.contains(account) {
            return Err(CoreError::Validation(format!(
                "Account not registered: {}",
                account.name
            )));
        }
        registry
            .user_data
            .entry(account.clone())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Remove an account and its user data. Returns whether it was registered.
    pub fn remove_account(&self, account: &AccountHandle) -> CoreResult<bool> {
        let mut registry = self.registry.write().map_err(poisoned)?;
        let before = registry.accounts.len();
        registry.accounts.retain(|a| a != account);
        registry.user_data.remove(account);
        Ok(registry.accounts.len() != before)
    }
}

impl AccountManager for InMemoryAccountManager {
    fn accounts(&self) -> CoreResult<Vec<AccountHandle>> {
        Ok(self.registry.read().map_err(poisoned)?.accounts.clone())
    }

    fn user_data(&self, account: &AccountHandle, key: &str) -> CoreResult<Option<String>> {
        Ok(self
            .registry
            .read()
            .map_err(poisoned)?
            .user_data
            .get(account)
            .and_then(|data| data.get(key))
            .cloned())
    }
}
