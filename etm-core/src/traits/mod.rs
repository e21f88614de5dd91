//! Storage layer abstraction trait definition

mod account_manager;
mod preference_store;

pub use account_manager::AccountManager;
pub use preference_store::{PreferenceStore, PreferencesMap};
