//! Platform account manager abstract Trait

use crate::error::CoreResult;
use crate::types::AccountHandle;

/// Platform account manager
///
/// Platform implementation:
/// - `InMemoryAccountManager` (etm-app)
pub trait AccountManager: Send + Sync {
    /// List registered accounts, in the platform's enumeration order
    fn accounts(&self) -> CoreResult<Vec<AccountHandle>>;

    /// Look up one user-data value of an account
    ///
    /// # Returns
    /// * `Ok(Some(value))` - value present
    /// * `Ok(None)` - the account holds no value for `key`
    fn user_data(&self, account: &AccountHandle, key: &str) -> CoreResult<Option<String>>;
}
