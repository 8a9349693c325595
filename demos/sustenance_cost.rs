//! 家計維持成本計算示例

use merc::merc_core::player::{Household, Sustenance};
use merc::merc_core::{InventoryFlow, InventoryManager};
use merc::{ItemId, Player, SustenanceCalculator};
use rust_decimal::Decimal;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== 家計維持成本計算示例 ===\n");

    // 家戶每回合消耗麵包與啤酒
    let mut sustenance = Sustenance::default();
    for (item, consumption) in [("bread", Decimal::from(2)), ("beer", Decimal::new(5, 1))] {
        sustenance
            .inventory
            .managers
            .insert(ItemId::new(item), InventoryManager::default());
        sustenance.inventory.previous_flows.insert(
            ItemId::new(item),
            InventoryFlow {
                consumption: Some(consumption),
                ..InventoryFlow::default()
            },
        );
    }

    let player = Player {
        username: "hanse".to_string(),
        household: Household {
            id: "H-1".to_string(),
            name: Some("Hanse Trading House".to_string()),
            business_ids: vec!["B-1".to_string()],
            prestige: Decimal::new(25, 1),
            sustenance,
        },
    };

    // 單位成本（實務上來自倉庫的平均成本）
    let mut unit_costs = HashMap::new();
    unit_costs.insert(ItemId::new("bread"), Decimal::new(15, 1));
    unit_costs.insert(ItemId::new("beer"), Decimal::from(2));

    println!("玩家: {}, 聲望: {}", player.username, player.prestige());
    println!("維持物品:");
    for item in player.sustenance_items() {
        println!(
            "  - {}: 消耗 {}, 成本 {}",
            item,
            player.sustenance_consumption(item),
            SustenanceCalculator::item_cost(&player, item, &unit_costs)
        );
    }

    let total = SustenanceCalculator::total_cost(&player, &unit_costs);
    println!("\n維持總成本: {total}");

    Ok(())
}
