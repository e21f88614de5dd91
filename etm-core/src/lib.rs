//! ETM Core Library
//!
//! Platform-independent logic behind the engineering test mode (diagnostics) screen:
//! - Account identity values and their parcel codec
//! - Diagnostics view-model (page navigation + preference/account snapshots)
//!
//! The preference store and the account manager are abstracted through traits,
//! so any host (desktop shell, mobile bridge, test harness) can inject its own.

pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod observable;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use diagnostics::{DiagnosticsViewModel, NavigationState};
pub use error::{CoreError, CoreResult, DecodeError};
pub use observable::LiveValue;
pub use traits::{AccountManager, PreferenceStore};
pub use types::{AnonymousUser, User};
