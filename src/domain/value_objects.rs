use serde::{Deserialize, Serialize};
use std::fmt;

/// 利用者ID - 利用者管理コンテキストへの参照
///
/// 中身は不透明な文字列。空かどうかの検証は貸出時に行う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// 空白のみ、または空のIDか
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 書籍ID - カタログ管理コンテキストへの参照
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// 空白のみ、または空のIDか
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 利用者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
        }
    }
}

/// 書籍
///
/// 貸出期間に影響する属性は人気本フラグのみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub is_popular: bool,
}

impl Book {
    pub fn new(id: impl Into<String>, is_popular: bool) -> Self {
        Self {
            id: BookId::new(id),
            is_popular,
        }
    }

    /// 通常本
    pub fn normal(id: impl Into<String>) -> Self {
        Self::new(id, false)
    }

    /// 人気本
    pub fn popular(id: impl Into<String>) -> Self {
        Self::new(id, true)
    }
}
