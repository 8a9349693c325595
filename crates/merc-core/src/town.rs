//! 城鎮模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::item::ItemId;

/// 地圖座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub x: i64,
    pub y: i64,
}

/// 城鎮（清單項）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Town {
    /// 城鎮ID
    pub id: String,

    /// 城鎮名稱
    pub name: String,

    /// 座標
    pub location: Location,

    /// 區域
    pub region: i64,

    /// 是否為首府
    #[serde(default)]
    pub capital: bool,
}

/// 城鎮詳細資料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownData {
    /// 城鎮ID
    pub id: String,

    /// 城鎮名稱
    pub name: String,

    /// 座標
    pub location: Location,

    /// 區域
    pub region: i64,

    /// 平民
    pub commoners: TownCommoners,

    /// 政府
    pub government: TownGovernment,

    /// 按ID索引的城內設施
    #[serde(default)]
    pub structures: HashMap<String, TownStructure>,
}

impl TownData {
    /// 查找平民對某物品的需求
    pub fn demand_for(&self, product: &ItemId) -> Option<&TownDemand> {
        self.commoners
            .sustenance
            .iter()
            .flat_map(|category| category.products.iter())
            .find(|demand| &demand.product == product)
    }

    /// 按ID取得城內設施
    pub fn structure(&self, id: &str) -> Option<&TownStructure> {
        self.structures.get(id)
    }
}

/// 城內設施
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownStructure {
    /// 設施ID
    pub id: i64,

    /// 設施類型
    #[serde(rename = "type")]
    pub structure_type: String,

    /// 規模
    pub size: Option<u32>,

    /// 擁有者ID
    pub owner_id: String,

    /// 座標
    pub location: Location,
}

/// 城鎮平民
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownCommoners {
    /// 帳戶ID
    pub account_id: String,

    /// 人口
    pub count: i64,

    /// 遷徙率
    #[serde(default)]
    pub migration: Decimal,

    /// 按類別分組的生活需求
    #[serde(default)]
    pub sustenance: Vec<TownDemandCategory>,
}

/// 需求類別
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownDemandCategory {
    /// 類別名稱
    pub name: String,

    /// 類別內各物品的需求
    #[serde(default)]
    pub products: Vec<TownDemand>,
}

/// 單一物品的城鎮需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownDemand {
    /// 物品
    pub product: ItemId,

    /// 加成
    #[serde(default)]
    pub bonus: i64,

    /// 期望量
    #[serde(default)]
    pub desire: i64,

    /// 請求量
    #[serde(default)]
    pub request: i64,

    /// 實際取得量
    #[serde(default)]
    pub result: i64,
}

impl TownDemand {
    /// 未滿足的需求量（期望 - 實際，下限為 0）
    pub fn deficit(&self) -> i64 {
        (self.desire - self.result).max(0)
    }

    /// 需求是否已完全滿足
    pub fn is_satisfied(&self) -> bool {
        self.deficit() == 0
    }
}

/// 城鎮政府
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownGovernment {
    /// 帳戶ID
    pub account_id: String,

    /// 政府採購需求
    #[serde(default)]
    pub demands: Vec<TownDemand>,

    /// 已徵稅收
    #[serde(default)]
    pub taxes_collected: TownGovernmentTaxes,
}

/// 政府稅收
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TownGovernmentTaxes {
    /// 土地稅
    #[serde(default)]
    pub land_tax: Decimal,

    /// 設施稅
    #[serde(default)]
    pub structure_tax: Decimal,

    /// 渡船費
    #[serde(default)]
    pub ferry_fees: Decimal,
}

impl TownGovernmentTaxes {
    /// 稅收總額
    pub fn total(&self) -> Decimal {
        self.land_tax + self.structure_tax + self.ferry_fees
    }
}
