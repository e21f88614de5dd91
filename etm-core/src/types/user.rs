//! 账户身份类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::CoreResult;

/// Sentinel identity used when no real account is signed in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymousUser {
    account_name: String,
}

impl AnonymousUser {
    #[must_use]
    pub fn new(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
        }
    }

    #[must_use]
    pub fn account_name(&self) -> &str {
        &self.account_name
    }
}

/// 身份种类（每个变体对应一个 parcel 标签）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Anonymous,
}

impl UserKind {
    /// 所有已知种类
    pub fn all() -> &'static [UserKind] {
        &[UserKind::Anonymous]
    }

    /// Wire tag written into the parcel envelope
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            UserKind::Anonymous => "anonymous",
        }
    }

    /// Inverse of [`UserKind::tag`]
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Account identity, one variant per identity kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum User {
    Anonymous(AnonymousUser),
}

impl User {
    /// Shorthand for `User::Anonymous(AnonymousUser::new(name))`
    #[must_use]
    pub fn anonymous(account_name: impl Into<String>) -> Self {
        Self::Anonymous(AnonymousUser::new(account_name))
    }

    #[must_use]
    pub fn kind(&self) -> UserKind {
        match self {
            Self::Anonymous(_) => UserKind::Anonymous,
        }
    }

    #[must_use]
    pub fn account_name(&self) -> &str {
        match self {
            Self::Anonymous(user) => user.account_name(),
        }
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    /// Encode into the parcel form, see [`codec::encode`]
    pub fn to_parcel(&self) -> CoreResult<String> {
        codec::encode(self)
    }

    /// Decode from the parcel form, see [`codec::decode`]
    pub fn from_parcel(parcel: &str) -> CoreResult<Self> {
        codec::decode(parcel)
    }
}

impl From<AnonymousUser> for User {
    fn from(user: AnonymousUser) -> Self {
        Self::Anonymous(user)
    }
}
