//! 玩家模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::item::ItemId;

/// 家計維持（家戶每回合消耗的物品與其庫存）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sustenance {
    /// 維持用庫存
    #[serde(default)]
    pub inventory: Inventory,

    /// 供應參照
    pub reference: Option<String>,
}

/// 家戶
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Household {
    /// 家戶ID
    pub id: String,

    /// 家戶名稱
    pub name: Option<String>,

    /// 所屬事業ID
    #[serde(default)]
    pub business_ids: Vec<String>,

    /// 聲望
    #[serde(default)]
    pub prestige: Decimal,

    /// 家計維持
    #[serde(default)]
    pub sustenance: Sustenance,
}

/// 玩家
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// 玩家名稱
    pub username: String,

    /// 家戶
    pub household: Household,
}

impl Player {
    /// 聲望
    pub fn prestige(&self) -> Decimal {
        self.household.prestige
    }

    /// 家計維持目前消耗的物品（即設有管理設定的物品）
    pub fn sustenance_items(&self) -> Vec<&ItemId> {
        self.household.sustenance.inventory.managers.keys().collect()
    }

    /// 某物品的家計消耗量（上一回合，未記錄時為 0）
    pub fn sustenance_consumption(&self, item: &ItemId) -> Decimal {
        self.household
            .sustenance
            .inventory
            .previous_flow(item)
            .map(|flow| flow.consumed())
            .unwrap_or(Decimal::ZERO)
    }
}
