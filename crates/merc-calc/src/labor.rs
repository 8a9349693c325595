//! 勞動力需求計算

use rust_decimal::Decimal;
use std::collections::HashMap;

use merc_core::{
    Building, InventoryAsset, InventoryManager, ItemId, Recipe, RecipeBook,
};

use crate::{InputShortage, LaborEstimate};

/// 勞動力需求計算器
///
/// 純函數計算：輸入為配方、目標產量倍率與呼叫端提供的庫存快照，
/// 輸出為維持該目標所需的勞動力。不持有狀態、不產生錯誤，
/// 缺漏的資料一律退化為零。
pub struct LaborCalculator;

impl LaborCalculator {
    /// 計算目標產量所需的勞動力
    ///
    /// 規則：
    /// - 無配方或目標倍率為零（含負值）→ 0
    /// - 勞動力 = 配方基礎勞動力 × 目標倍率，與存量無關
    /// - 存量與管理設定只用於可行性判斷，不改變勞動力數值
    pub fn estimate(
        recipe: Option<&Recipe>,
        target: Decimal,
        assets: &HashMap<ItemId, InventoryAsset>,
        managers: &HashMap<ItemId, InventoryManager>,
    ) -> Decimal {
        Self::estimate_detailed(recipe, target, assets, managers).labor_need
    }

    /// 計算勞動力需求並回報原料缺口
    pub fn estimate_detailed(
        recipe: Option<&Recipe>,
        target: Decimal,
        assets: &HashMap<ItemId, InventoryAsset>,
        managers: &HashMap<ItemId, InventoryManager>,
    ) -> LaborEstimate {
        let Some(recipe) = recipe else {
            return LaborEstimate::empty();
        };

        if target <= Decimal::ZERO {
            return LaborEstimate::empty();
        }

        tracing::debug!(
            recipe = %recipe.name,
            %target,
            inputs = recipe.inputs.len(),
            "計算勞動力需求"
        );

        // 逐原料檢查目標產量下的存量缺口。未記錄的物品視為零存量。
        let mut shortages = Vec::new();
        for ingredient in &recipe.inputs {
            let required = ingredient.amount * target;
            let available = assets
                .get(&ingredient.product)
                .map(|asset| asset.balance)
                .unwrap_or(Decimal::ZERO);

            if available < required {
                tracing::debug!(
                    product = %ingredient.product,
                    %required,
                    %available,
                    "原料存量不足"
                );
                shortages.push(InputShortage {
                    product: ingredient.product.clone(),
                    required,
                    available,
                });
            }
        }

        // 管理設定目前不參與計算，僅記錄供除錯
        if !managers.is_empty() {
            tracing::trace!(managed = managers.len(), "庫存含管理設定");
        }

        LaborEstimate {
            labor_need: recipe.labor * target,
            shortages,
        }
    }

    /// 依建築目前的生產配置計算勞動力需求
    ///
    /// 來源選擇與原始實作一致：庫存資產優先取倉儲，其次取生產線
    /// 自有庫存；管理設定亦同。建築未設生產、或配方總表查無該
    /// 配方時回傳 0。
    pub fn for_building(building: &Building, recipes: &RecipeBook) -> Decimal {
        let Some(producer) = building.production() else {
            return Decimal::ZERO;
        };

        let recipe = recipes.find(&producer.recipe);
        if recipe.is_none() {
            tracing::warn!(
                building = building.id,
                recipe = %producer.recipe,
                "配方總表查無建築使用的配方"
            );
        }

        // 資產優先取倉儲（倉儲為空時退回生產線自有庫存）
        let assets = match building.assets() {
            Some(assets) if !assets.is_empty() => assets,
            _ => &producer.inventory.account.assets,
        };

        // 管理設定只看倉儲是否存在
        let managers = match building.managers() {
            Some(managers) => managers,
            None => &producer.inventory.managers,
        };

        Self::estimate(recipe, building.target_production(), assets, managers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merc_core::building::{BuildingStorage, Producer};
    use merc_core::Inventory;
    use rstest::rstest;

    fn recipe_with_labor(labor: Decimal) -> Recipe {
        Recipe::new("baking_bread", labor)
            .with_input("flour", Decimal::from(2))
            .with_input("firewood", Decimal::new(5, 1))
            .with_output("bread", Decimal::from(1))
    }

    fn assets_with(balances: &[(&str, Decimal)]) -> HashMap<ItemId, InventoryAsset> {
        balances
            .iter()
            .map(|(item, balance)| {
                (ItemId::new(*item), InventoryAsset::with_balance(*balance))
            })
            .collect()
    }

    #[test]
    fn test_zero_target_yields_zero() {
        let recipe = recipe_with_labor(Decimal::from(3));
        let assets = assets_with(&[("flour", Decimal::from(100))]);

        let labor = LaborCalculator::estimate(
            Some(&recipe),
            Decimal::ZERO,
            &assets,
            &HashMap::new(),
        );
        assert_eq!(labor, Decimal::ZERO);
    }

    #[test]
    fn test_absent_recipe_yields_zero() {
        // 配方缺席：無論目標倍率多大都是 0
        let labor = LaborCalculator::estimate(
            None,
            Decimal::from(3),
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(labor, Decimal::ZERO);
    }

    #[test]
    fn test_nominal_scaling_with_empty_inventory() {
        // 基礎勞動力 2.5 × 目標 4.0 = 10.0，空庫存不影響數值
        let recipe = recipe_with_labor(Decimal::new(25, 1));

        let labor = LaborCalculator::estimate(
            Some(&recipe),
            Decimal::from(4),
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(labor, Decimal::from(10));
    }

    #[rstest]
    #[case(Decimal::from(1), Decimal::new(25, 1))]
    #[case(Decimal::from(2), Decimal::from(5))]
    #[case(Decimal::new(5, 1), Decimal::new(125, 2))]
    fn test_labor_scales_linearly(#[case] target: Decimal, #[case] expected: Decimal) {
        let recipe = recipe_with_labor(Decimal::new(25, 1));

        // 存量充足與否都不改變勞動力數值
        let full = assets_with(&[
            ("flour", Decimal::from(1000)),
            ("firewood", Decimal::from(1000)),
        ]);
        let empty = HashMap::new();

        for assets in [&full, &empty] {
            let labor = LaborCalculator::estimate(
                Some(&recipe),
                target,
                assets,
                &HashMap::new(),
            );
            assert_eq!(labor, expected);
        }
    }

    #[test]
    fn test_shortage_reporting() {
        let recipe = recipe_with_labor(Decimal::from(2));
        // flour 需求 2×4=8，存量 5；firewood 需求 0.5×4=2，存量 10
        let assets = assets_with(&[
            ("flour", Decimal::from(5)),
            ("firewood", Decimal::from(10)),
        ]);

        let estimate = LaborCalculator::estimate_detailed(
            Some(&recipe),
            Decimal::from(4),
            &assets,
            &HashMap::new(),
        );

        assert_eq!(estimate.labor_need, Decimal::from(8));
        assert!(!estimate.is_feasible());
        assert_eq!(estimate.shortages.len(), 1);

        let shortage = &estimate.shortages[0];
        assert_eq!(shortage.product, ItemId::new("flour"));
        assert_eq!(shortage.required, Decimal::from(8));
        assert_eq!(shortage.available, Decimal::from(5));
        assert_eq!(shortage.missing(), Decimal::from(3));
    }

    #[test]
    fn test_missing_items_treated_as_zero_stock() {
        let recipe = recipe_with_labor(Decimal::from(1));

        let estimate = LaborCalculator::estimate_detailed(
            Some(&recipe),
            Decimal::from(1),
            &HashMap::new(),
            &HashMap::new(),
        );

        // 兩項原料都未記錄：都是缺口，但勞動力仍照常計算
        assert_eq!(estimate.labor_need, Decimal::from(1));
        assert_eq!(estimate.shortages.len(), 2);
        assert!(estimate
            .shortages
            .iter()
            .all(|s| s.available == Decimal::ZERO));
    }

    #[test]
    fn test_managers_are_inert() {
        let recipe = recipe_with_labor(Decimal::from(3));
        let assets = assets_with(&[("flour", Decimal::from(1))]);

        let mut managers = HashMap::new();
        managers.insert(
            ItemId::new("flour"),
            InventoryManager {
                buy_volume: Some(Decimal::from(50)),
                ..InventoryManager::default()
            },
        );

        let with = LaborCalculator::estimate_detailed(
            Some(&recipe),
            Decimal::from(2),
            &assets,
            &managers,
        );
        let without = LaborCalculator::estimate_detailed(
            Some(&recipe),
            Decimal::from(2),
            &assets,
            &HashMap::new(),
        );

        // 管理設定不改變勞動力，也不改變缺口判定
        assert_eq!(with.labor_need, without.labor_need);
        assert_eq!(with.shortages.len(), without.shortages.len());
    }

    #[test]
    fn test_negative_target_clamps_to_zero() {
        let recipe = recipe_with_labor(Decimal::from(2));
        let labor = LaborCalculator::estimate(
            Some(&recipe),
            Decimal::from(-1),
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(labor, Decimal::ZERO);
    }

    #[test]
    fn test_for_building_uses_storage_assets() {
        let recipes = RecipeBook::from_recipes(vec![recipe_with_labor(Decimal::from(2))]);

        // 有倉儲：資產來自倉儲
        let mut storage = BuildingStorage::default();
        storage.inventory.account.assets.insert(
            ItemId::new("flour"),
            InventoryAsset::with_balance(Decimal::from(100)),
        );

        let building = Building {
            id: 1,
            name: None,
            owner_id: None,
            town_id: None,
            building_type: "bakery".to_string(),
            size: None,
            construction: None,
            producer: Some(Producer {
                inventory: Inventory::default(),
                limited: false,
                recipe: "baking_bread".to_string(),
                target: Some(Decimal::new(15, 1)),
            }),
            storage: Some(storage),
            upgrades: Vec::new(),
        };

        assert_eq!(
            LaborCalculator::for_building(&building, &recipes),
            Decimal::from(3) // 2 × 1.5
        );
    }

    #[test]
    fn test_for_building_falls_back_to_producer_inventory() {
        let recipes = RecipeBook::from_recipes(vec![recipe_with_labor(Decimal::from(2))]);

        // 無倉儲：資產與管理設定取自生產線自有庫存
        let mut inventory = Inventory::default();
        inventory.account.assets.insert(
            ItemId::new("flour"),
            InventoryAsset::with_balance(Decimal::from(100)),
        );
        inventory.account.assets.insert(
            ItemId::new("firewood"),
            InventoryAsset::with_balance(Decimal::from(100)),
        );

        let building = Building {
            id: 4,
            name: None,
            owner_id: None,
            town_id: None,
            building_type: "bakery".to_string(),
            size: None,
            construction: None,
            producer: Some(Producer {
                inventory,
                limited: false,
                recipe: "baking_bread".to_string(),
                target: Some(Decimal::from(2)),
            }),
            storage: None,
            upgrades: Vec::new(),
        };

        assert_eq!(
            LaborCalculator::for_building(&building, &recipes),
            Decimal::from(4)
        );

        let producer = building.production().unwrap();
        let estimate = LaborCalculator::estimate_detailed(
            recipes.find(&producer.recipe),
            building.target_production(),
            &producer.inventory.account.assets,
            &producer.inventory.managers,
        );
        assert!(estimate.is_feasible());
    }

    #[test]
    fn test_for_building_without_producer() {
        let recipes = RecipeBook::new();
        let building = Building {
            id: 2,
            name: None,
            owner_id: None,
            town_id: None,
            building_type: "warehouse".to_string(),
            size: None,
            construction: None,
            producer: None,
            storage: None,
            upgrades: Vec::new(),
        };

        assert_eq!(
            LaborCalculator::for_building(&building, &recipes),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_for_building_unknown_recipe() {
        // 配方總表查無配方 → 視為無配方，回傳 0
        let recipes = RecipeBook::new();
        let building = Building {
            id: 3,
            name: None,
            owner_id: None,
            town_id: None,
            building_type: "bakery".to_string(),
            size: None,
            construction: None,
            producer: Some(Producer {
                inventory: Inventory::default(),
                limited: false,
                recipe: "baking_bread".to_string(),
                target: Some(Decimal::from(2)),
            }),
            storage: None,
            upgrades: Vec::new(),
        };

        assert_eq!(
            LaborCalculator::for_building(&building, &recipes),
            Decimal::ZERO
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // 勞動力 = 基礎勞動力 × 目標倍率，與庫存無關
            #[test]
            fn labor_is_exact_scaling(
                labor_mantissa in 0i64..1_000_000,
                target_mantissa in 0i64..1_000_000,
                stock in 0i64..10_000,
            ) {
                let labor = Decimal::new(labor_mantissa, 2);
                let target = Decimal::new(target_mantissa, 2);
                let recipe = Recipe::new("r", labor)
                    .with_input("flour", Decimal::from(1));
                let assets = assets_with(&[("flour", Decimal::from(stock))]);

                let result = LaborCalculator::estimate(
                    Some(&recipe),
                    target,
                    &assets,
                    &HashMap::new(),
                );
                prop_assert_eq!(result, labor * target);
            }

            // 目標倍率單調遞增時勞動力不遞減
            #[test]
            fn labor_is_monotone_in_target(
                m1 in 0i64..1_000_000,
                m2 in 0i64..1_000_000,
            ) {
                let (lo, hi) = if m1 <= m2 { (m1, m2) } else { (m2, m1) };
                let recipe = Recipe::new("r", Decimal::new(37, 1));

                let low = LaborCalculator::estimate(
                    Some(&recipe),
                    Decimal::new(lo, 3),
                    &HashMap::new(),
                    &HashMap::new(),
                );
                let high = LaborCalculator::estimate(
                    Some(&recipe),
                    Decimal::new(hi, 3),
                    &HashMap::new(),
                    &HashMap::new(),
                );
                prop_assert!(low <= high);
            }

            // 結果永遠非負
            #[test]
            fn labor_is_never_negative(
                target_mantissa in -1_000_000i64..1_000_000,
            ) {
                let recipe = Recipe::new("r", Decimal::from(5));
                let result = LaborCalculator::estimate(
                    Some(&recipe),
                    Decimal::new(target_mantissa, 2),
                    &HashMap::new(),
                    &HashMap::new(),
                );
                prop_assert!(result >= Decimal::ZERO);
            }
        }
    }
}
