//! 勞動力需求計算示例

use merc::merc_core::building::Producer;
use merc::merc_core::{Inventory, InventoryAsset, ItemId};
use merc::{Building, LaborCalculator, Recipe, RecipeBook};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== 勞動力需求計算示例 ===\n");

    // 靜態配方資料
    let recipes = RecipeBook::from_recipes(vec![Recipe::new(
        "baking_bread",
        Decimal::new(25, 1), // 每單位產出需要 2.5 勞動力
    )
    .with_input("flour", Decimal::from(2))
    .with_input("firewood", Decimal::new(5, 1))
    .with_output("bread", Decimal::from(1))]);

    // 一座目標產量 4.0 的麵包坊
    let mut inventory = Inventory::default();
    inventory.account.assets.insert(
        ItemId::new("flour"),
        InventoryAsset::with_balance(Decimal::from(3)),
    );

    let building = Building {
        id: 101,
        name: Some("Old Town Bakery".to_string()),
        owner_id: None,
        town_id: Some(1),
        building_type: "bakery".to_string(),
        size: Some(1),
        construction: None,
        producer: Some(Producer {
            inventory,
            limited: false,
            recipe: "baking_bread".to_string(),
            target: Some(Decimal::from(4)),
        }),
        storage: None,
        upgrades: Vec::new(),
    };

    let producer = building.production().expect("示例建築設有生產線");
    println!(
        "建築: {} (#{}), 配方: {}, 目標倍率: {}",
        building.name.as_deref().unwrap_or("?"),
        building.id,
        producer.recipe,
        building.target_production()
    );

    let labor = LaborCalculator::for_building(&building, &recipes);
    println!("所需勞動力: {labor}");

    // 詳細結果：原料缺口
    let estimate = LaborCalculator::estimate_detailed(
        recipes.find(&producer.recipe),
        building.target_production(),
        &producer.inventory.account.assets,
        &producer.inventory.managers,
    );
    if estimate.is_feasible() {
        println!("庫存足以支撐目標產量");
    } else {
        println!("原料缺口:");
        for shortage in &estimate.shortages {
            println!(
                "  - {}: 需要 {}, 現有 {}, 缺 {}",
                shortage.product,
                shortage.required,
                shortage.available,
                shortage.missing()
            );
        }
    }

    Ok(())
}
