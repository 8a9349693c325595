//! # Merc
//!
//! Mercatorio 遊戲資料模型與生產計算的統一入口。
//!
//! - [`merc_core`]：資料模型（建築、配方、庫存、城鎮、市場、玩家）
//! - [`merc_calc`]：計算引擎（勞動力需求、家計維持成本）

pub use merc_calc;
pub use merc_core;

// 常用類型直接 re-export
pub use merc_calc::{LaborCalculator, LaborEstimate, SustenanceCalculator};
pub use merc_core::{
    Building, Buildings, Inventory, ItemId, MercError, Player, Recipe, RecipeBook, Town,
};
