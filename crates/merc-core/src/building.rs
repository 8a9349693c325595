//! 建築模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::inventory::{Inventory, InventoryAsset, InventoryFlow, InventoryManager};
use crate::item::ItemId;
use crate::{MercError, Result};

/// 生產設定（建築的生產線）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    /// 生產線自有庫存
    #[serde(default)]
    pub inventory: Inventory,

    /// 是否受限（例如缺料停工）
    #[serde(default)]
    pub limited: bool,

    /// 使用的配方名稱
    pub recipe: String,

    /// 目標產量倍率（相對配方基準產能，1.0 = 標準產能）
    pub target: Option<Decimal>,
}

/// 倉儲（建築的儲存空間）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingStorage {
    /// 倉儲庫存
    #[serde(default)]
    pub inventory: Inventory,

    /// 倉儲參照
    pub reference: Option<String>,
}

/// 施工狀態（存在即表示建築仍在施工中）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Construction {
    /// 尚需的建材
    #[serde(default)]
    pub materials: HashMap<ItemId, Decimal>,

    /// 剩餘回合數
    pub time: Option<u32>,
}

/// 建築
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// 建築ID
    pub id: i64,

    /// 建築名稱
    pub name: Option<String>,

    /// 擁有者ID
    pub owner_id: Option<String>,

    /// 所在城鎮ID
    pub town_id: Option<i64>,

    /// 建築類型（例如 "bakery"、"farm"）
    #[serde(rename = "type")]
    pub building_type: String,

    /// 建築規模
    pub size: Option<u32>,

    /// 施工狀態
    pub construction: Option<Construction>,

    /// 生產設定
    pub producer: Option<Producer>,

    /// 倉儲
    pub storage: Option<BuildingStorage>,

    /// 已安裝的升級
    #[serde(default)]
    pub upgrades: Vec<String>,
}

impl Building {
    /// 倉儲庫存
    pub fn inventory(&self) -> Option<&Inventory> {
        self.storage.as_ref().map(|s| &s.inventory)
    }

    /// 倉儲內按物品索引的資產
    pub fn assets(&self) -> Option<&HashMap<ItemId, InventoryAsset>> {
        self.inventory().map(|inv| &inv.account.assets)
    }

    /// 倉儲內按物品索引的管理設定
    pub fn managers(&self) -> Option<&HashMap<ItemId, InventoryManager>> {
        self.inventory().map(|inv| &inv.managers)
    }

    /// 倉儲內按物品索引的上一回合流量
    pub fn previous_flows(&self) -> Option<&HashMap<ItemId, InventoryFlow>> {
        self.inventory().map(|inv| &inv.previous_flows)
    }

    /// 取得倉儲內某物品的資產紀錄
    pub fn asset(&self, item: &ItemId) -> Option<&InventoryAsset> {
        self.inventory().and_then(|inv| inv.asset(item))
    }

    /// 取得倉儲內某物品的管理設定
    pub fn manager(&self, item: &ItemId) -> Option<&InventoryManager> {
        self.inventory().and_then(|inv| inv.manager(item))
    }

    /// 取得倉儲內某物品的上一回合流量
    pub fn flow(&self, item: &ItemId) -> Option<&InventoryFlow> {
        self.inventory().and_then(|inv| inv.previous_flow(item))
    }

    /// 生產設定
    pub fn production(&self) -> Option<&Producer> {
        self.producer.as_ref()
    }

    /// 目標產量倍率（未設定生產或目標時為 0）
    pub fn target_production(&self) -> Decimal {
        self.producer
            .as_ref()
            .and_then(|p| p.target)
            .unwrap_or(Decimal::ZERO)
    }

    /// 是否仍在施工中
    pub fn under_construction(&self) -> bool {
        self.construction.is_some()
    }
}

/// 建築清單
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Buildings(Vec<Building>);

impl Buildings {
    /// 創建空的清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加建築
    pub fn push(&mut self, building: Building) {
        self.0.push(building);
    }

    /// 按ID取得建築
    pub fn get(&self, id: i64) -> Result<&Building> {
        self.iter()
            .find(|b| b.id == id)
            .ok_or(MercError::BuildingNotFound(id))
    }

    /// 篩選某類型的所有建築
    pub fn by_type<'a>(&'a self, building_type: &'a str) -> impl Iterator<Item = &'a Building> {
        self.iter().filter(move |b| b.building_type == building_type)
    }

    /// 迭代所有建築
    pub fn iter(&self) -> std::slice::Iter<'_, Building> {
        self.0.iter()
    }

    /// 建築數量
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Building>> for Buildings {
    fn from(buildings: Vec<Building>) -> Self {
        Self(buildings)
    }
}

impl IntoIterator for Buildings {
    type Item = Building;
    type IntoIter = std::vec::IntoIter<Building>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
