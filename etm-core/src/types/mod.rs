//! 类型定义模块

mod account;
mod menu;
mod preference;
mod user;

pub use account::{
    AccountData, AccountHandle, ACCOUNT_USER_DATA_KEYS, KEY_DISPLAY_NAME, KEY_OC_ACCOUNT_VERSION,
    KEY_OC_BASE_URL, KEY_OC_VERSION, KEY_USER_ID,
};
pub use menu::{default_pages, MenuEntry, PageId};
pub use preference::PreferenceValue;
pub use user::{AnonymousUser, User, UserKind};
