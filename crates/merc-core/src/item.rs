//! 物品識別碼

use serde::{Deserialize, Serialize};
use std::fmt;

/// 物品ID（遊戲內物品的唯一名稱，例如 "wheat"、"labour"）
///
/// 所有按物品索引的映射（庫存資產、管理設定、流量、配方原料）
/// 都以此類型作為鍵。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// 創建新的物品ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 取得內部字串
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
