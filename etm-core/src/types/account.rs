//! 账户相关类型定义

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display name of the account owner
pub const KEY_DISPLAY_NAME: &str = "oc_display_name";
/// Version of the account data layout
pub const KEY_OC_ACCOUNT_VERSION: &str = "oc_account_version";
/// Server base URL
pub const KEY_OC_BASE_URL: &str = "oc_base_url";
/// Server version string
pub const KEY_OC_VERSION: &str = "oc_version";
/// Server-side user id
pub const KEY_USER_ID: &str = "oc_id";

/// User-data keys shown on the accounts page.
///
/// Session cookies are stored under their own key and are never read here.
pub const ACCOUNT_USER_DATA_KEYS: [&str; 5] = [
    KEY_DISPLAY_NAME,
    KEY_OC_ACCOUNT_VERSION,
    KEY_OC_BASE_URL,
    KEY_OC_VERSION,
    KEY_USER_ID,
];

/// Platform account handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHandle {
    /// 账户名称
    pub name: String,
    /// 账户类型
    pub account_type: String,
}

impl AccountHandle {
    #[must_use]
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}

/// An account together with its recognized user data.
///
/// Every key of [`ACCOUNT_USER_DATA_KEYS`] is present; values the platform
/// does not hold are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub account: AccountHandle,
    pub user_data: BTreeMap<String, Option<String>>,
}

impl AccountData {
    /// 获取某个键的值
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.user_data.get(key).and_then(Option::as_deref)
    }
}
