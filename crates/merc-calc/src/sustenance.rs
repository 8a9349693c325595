//! 家計維持成本計算

use rust_decimal::Decimal;
use std::collections::HashMap;

use merc_core::{ItemId, Player};

/// 家計維持成本計算器
pub struct SustenanceCalculator;

impl SustenanceCalculator {
    /// 計算單一物品的維持成本（上一回合消耗量 × 單位成本）
    ///
    /// 未記錄消耗或查無單位成本的物品成本為 0。
    pub fn item_cost(
        player: &Player,
        item: &ItemId,
        unit_costs: &HashMap<ItemId, Decimal>,
    ) -> Decimal {
        let consumption = player.sustenance_consumption(item);
        let unit_cost = unit_costs.get(item).copied().unwrap_or(Decimal::ZERO);
        consumption * unit_cost
    }

    /// 計算家戶的維持總成本
    ///
    /// 加總所有設有管理設定的維持物品的成本。
    pub fn total_cost(player: &Player, unit_costs: &HashMap<ItemId, Decimal>) -> Decimal {
        let total = player
            .sustenance_items()
            .into_iter()
            .map(|item| Self::item_cost(player, item, unit_costs))
            .sum();

        tracing::debug!(
            player = %player.username,
            %total,
            "計算家計維持成本"
        );

        total
    }
}
