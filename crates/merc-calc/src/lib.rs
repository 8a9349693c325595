//! # Merc Calculation Engine
//!
//! 生產與家計計算引擎（勞動力需求、維持成本）

pub mod labor;
pub mod sustenance;

// Re-export 主要類型
pub use labor::LaborCalculator;
pub use sustenance::SustenanceCalculator;

use rust_decimal::Decimal;

use merc_core::ItemId;

/// 勞動力需求計算結果
#[derive(Debug, Clone)]
pub struct LaborEstimate {
    /// 所需勞動力
    pub labor_need: Decimal,

    /// 原料缺口（僅供可行性參考，不影響勞動力數值）
    pub shortages: Vec<InputShortage>,
}

impl LaborEstimate {
    /// 創建空的計算結果（無生產、無需求）
    pub fn empty() -> Self {
        Self {
            labor_need: Decimal::ZERO,
            shortages: Vec::new(),
        }
    }

    /// 以目前庫存是否足以支撐目標產量
    pub fn is_feasible(&self) -> bool {
        self.shortages.is_empty()
    }
}

/// 單一原料的缺口
#[derive(Debug, Clone)]
pub struct InputShortage {
    /// 物品
    pub product: ItemId,

    /// 目標產量所需數量
    pub required: Decimal,

    /// 現有存量
    pub available: Decimal,
}

impl InputShortage {
    /// 缺少的數量
    pub fn missing(&self) -> Decimal {
        self.required - self.available
    }
}
