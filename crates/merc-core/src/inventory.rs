//! 庫存模型
//!
//! 對應遠端 API 回傳的庫存快照：帳戶資產（每項物品的存量）、
//! 管理設定（每項物品的自動買賣策略）與上一回合的流量。
//! 原始實作以連鎖的可選屬性存取讀取巢狀結構，這裡改為
//! 明確的存取方法，查無資料時回傳 `None` 或零。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::item::ItemId;

/// 庫存帳戶資產（單一物品的存量紀錄）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryAsset {
    /// 現有存量
    pub balance: Decimal,

    /// 容量上限
    pub capacity: Option<Decimal>,

    /// 本回合購入量
    pub purchase: Option<Decimal>,

    /// 購入單價
    pub purchase_price: Option<Decimal>,

    /// 已保留數量（不可動用）
    pub reserved: Option<Decimal>,

    /// 本回合售出量
    pub sale: Option<Decimal>,

    /// 售出單價
    pub sale_price: Option<Decimal>,

    /// 平均單位成本
    pub unit_cost: Option<Decimal>,
}

impl InventoryAsset {
    /// 創建只有存量的資產紀錄
    pub fn with_balance(balance: Decimal) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    /// 可動用存量（現有存量 - 已保留）
    pub fn available(&self) -> Decimal {
        self.balance - self.reserved.unwrap_or(Decimal::ZERO)
    }
}

/// 庫存管理設定（單一物品的自動買賣策略，與存量正交）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryManager {
    /// 收購上限價
    pub buy_price: Option<Decimal>,

    /// 收購量
    pub buy_volume: Option<Decimal>,

    /// 管理容量
    pub capacity: Option<Decimal>,

    /// 最大持有量
    pub max_holding: Option<Decimal>,

    /// 出售下限價
    pub sell_price: Option<Decimal>,

    /// 出售量
    pub sell_volume: Option<Decimal>,
}

impl InventoryManager {
    /// 檢查是否設定了收購
    pub fn is_buying(&self) -> bool {
        self.buy_volume.is_some()
    }

    /// 檢查是否設定了出售
    pub fn is_selling(&self) -> bool {
        self.sell_volume.is_some()
    }
}

/// 庫存流量（單一物品在上一回合的進出）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFlow {
    /// 消耗量
    pub consumption: Option<Decimal>,

    /// 過期量
    pub expiration: Option<Decimal>,

    /// 輸出量
    pub export: Option<Decimal>,

    /// 輸入量
    pub imported: Option<Decimal>,

    /// 生產量
    pub production: Option<Decimal>,

    /// 購入量
    pub purchase: Option<Decimal>,

    /// 售出量
    pub sale: Option<Decimal>,
}

impl InventoryFlow {
    /// 消耗量（未記錄時視為 0）
    pub fn consumed(&self) -> Decimal {
        self.consumption.unwrap_or(Decimal::ZERO)
    }

    /// 生產量（未記錄時視為 0）
    pub fn produced(&self) -> Decimal {
        self.production.unwrap_or(Decimal::ZERO)
    }
}

/// 庫存帳戶
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryAccount {
    /// 帳戶ID
    pub id: Option<String>,

    /// 按物品索引的資產
    #[serde(default)]
    pub assets: HashMap<ItemId, InventoryAsset>,
}

/// 庫存快照
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// 庫存帳戶
    pub account: InventoryAccount,

    /// 總容量
    pub capacity: Option<Decimal>,

    /// 按物品索引的管理設定
    #[serde(default)]
    pub managers: HashMap<ItemId, InventoryManager>,

    /// 按物品索引的上一回合流量
    #[serde(default)]
    pub previous_flows: HashMap<ItemId, InventoryFlow>,
}

impl Inventory {
    /// 取得物品的資產紀錄
    pub fn asset(&self, item: &ItemId) -> Option<&InventoryAsset> {
        self.account.assets.get(item)
    }

    /// 取得物品的管理設定
    pub fn manager(&self, item: &ItemId) -> Option<&InventoryManager> {
        self.managers.get(item)
    }

    /// 取得物品的上一回合流量
    pub fn previous_flow(&self, item: &ItemId) -> Option<&InventoryFlow> {
        self.previous_flows.get(item)
    }

    /// 物品的現有存量（未記錄的物品視為 0）
    pub fn balance_of(&self, item: &ItemId) -> Decimal {
        self.asset(item)
            .map(|a| a.balance)
            .unwrap_or(Decimal::ZERO)
    }
}
