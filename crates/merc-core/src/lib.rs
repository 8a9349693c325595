//! # Merc Core
//!
//! 遊戲資料模型與類型定義（建築、配方、庫存、城鎮、市場、玩家）

pub mod building;
pub mod inventory;
pub mod item;
pub mod market;
pub mod player;
pub mod recipe;
pub mod town;

// Re-export 主要類型
pub use building::{Building, Buildings, BuildingStorage, Construction, Producer};
pub use inventory::{Inventory, InventoryAsset, InventoryFlow, InventoryManager};
pub use item::ItemId;
pub use market::{ItemOrder, MarketItemData, MarketItemDetails};
pub use player::{Household, Player, Sustenance};
pub use recipe::{Ingredient, Recipe, RecipeBook};
pub use town::{Town, TownData, TownDemand};

/// Merc 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum MercError {
    #[error("找不到配方: {0}")]
    RecipeNotFound(String),

    #[error("找不到建築: {0}")]
    BuildingNotFound(i64),

    #[error("建築沒有生產配置: {0}")]
    NoProducer(i64),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MercError>;
