//! Platform-agnostic store adapters for frontends without a native preference store.

mod in_memory_account_manager;
mod in_memory_preference_store;

#[cfg(feature = "json-store")]
mod json_preference_store;

pub use in_memory_account_manager::InMemoryAccountManager;
pub use in_memory_preference_store::InMemoryPreferenceStore;

#[cfg(feature = "json-store")]
pub use json_preference_store::JsonFilePreferenceStore;

use etm_core::error::CoreError;

/// Map a poisoned lock into a storage error.
pub(crate) fn poisoned<T>(_: std::sync::PoisonError<T>) -> CoreError {
    CoreError::Storage("store lock poisoned".to_string())
}
