//! 诊断菜单项定义

/// 诊断页面 ID（宿主据此选择渲染实现）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Preferences,
    Accounts,
}

/// 菜单项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: PageId,
    pub icon: &'static str,
    pub title: &'static str,
}

impl MenuEntry {
    #[must_use]
    pub const fn new(id: PageId, icon: &'static str, title: &'static str) -> Self {
        Self { id, icon, title }
    }
}

/// 默认菜单项列表
pub fn default_pages() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(PageId::Preferences, "settings", "Preferences"),
        MenuEntry::new(PageId::Accounts, "user", "Accounts"),
    ]
}
