//! 偏好存储抽象 Trait

use std::collections::HashMap;

use crate::error::CoreResult;
use crate::types::PreferenceValue;

/// 偏好映射类型：key -> 值
pub type PreferencesMap = HashMap<String, PreferenceValue>;

/// 偏好存储 Trait
///
/// The diagnostics core only reads from it. Contents may change between two
/// calls; callers get no transactional guarantee.
///
/// 平台实现:
/// - `InMemoryPreferenceStore` (etm-app)
/// - `JsonFilePreferenceStore` (etm-app, JSON 文件)
pub trait PreferenceStore: Send + Sync {
    /// 读取所有条目
    fn get_all(&self) -> CoreResult<PreferencesMap>;
}
