//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::diagnostics::DiagnosticsViewModel;
use crate::error::{CoreError, CoreResult};
use crate::traits::{AccountManager, PreferenceStore, PreferencesMap};
use crate::types::{AccountHandle, PreferenceValue};

// ===== MockPreferenceStore =====

pub struct MockPreferenceStore {
    entries: RwLock<PreferencesMap>,
    /// 如果 Some，get_all 时返回此错误
    error: RwLock<Option<String>>,
}

impl MockPreferenceStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            error: RwLock::new(None),
        }
    }

    pub fn put(&self, key: &str, value: impl Into<PreferenceValue>) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.into());
    }

    pub fn set_error(&self, err: Option<String>) {
        *self.error.write().unwrap() = err;
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn get_all(&self) -> CoreResult<PreferencesMap> {
        if let Some(ref msg) = *self.error.read().unwrap() {
            return Err(CoreError::Storage(msg.clone()));
        }
        Ok(self.entries.read().unwrap().clone())
    }
}

// ===== MockAccountManager =====

pub struct MockAccountManager {
    accounts: RwLock<Vec<AccountHandle>>,
    user_data: RwLock<HashMap<(AccountHandle, String), String>>,
    /// 如果 Some，user_data 时返回此错误
    error: RwLock<Option<String>>,
}

impl MockAccountManager {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
            user_data: RwLock::new(HashMap::new()),
            error: RwLock::new(None),
        }
    }

    pub fn add_account(&self, account: AccountHandle) {
        self.accounts.write().unwrap().push(account);
    }

    pub fn set_user_data(&self, account: &AccountHandle, key: &str, value: &str) {
        self.user_data
            .write()
            .unwrap()
            .insert((account.clone(), key.to_string()), value.to_string());
    }

    pub fn set_error(&self, err: Option<String>) {
        *self.error.write().unwrap() = err;
    }
}

impl AccountManager for MockAccountManager {
    fn accounts(&self) -> CoreResult<Vec<AccountHandle>> {
        Ok(self.accounts.read().unwrap().clone())
    }

    fn user_data(&self, account: &AccountHandle, key: &str) -> CoreResult<Option<String>> {
        if let Some(ref msg) = *self.error.read().unwrap() {
            return Err(CoreError::Storage(msg.clone()));
        }
        Ok(self
            .user_data
            .read()
            .unwrap()
            .get(&(account.clone(), key.to_string()))
            .cloned())
    }
}

// ===== 工厂方法 =====

pub fn create_test_view_model() -> (
    DiagnosticsViewModel,
    Arc<MockPreferenceStore>,
    Arc<MockAccountManager>,
) {
    let prefs = Arc::new(MockPreferenceStore::new());
    let accounts = Arc::new(MockAccountManager::new());
    let vm = DiagnosticsViewModel::new(prefs.clone(), accounts.clone());
    (vm, prefs, accounts)
}
