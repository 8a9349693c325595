//! 配方模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::item::ItemId;
use crate::{MercError, Result};

/// 配方原料（輸入或產出的一項）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// 物品
    pub product: ItemId,

    /// 每單位產出所需/產出的數量
    pub amount: Decimal,
}

/// 生產配方
///
/// 定義一個生產流程：所需原料（每單位產出的用量）、產出物品，
/// 以及每單位產出的基礎勞動力需求。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// 配方名稱（例如 "harvesting_wheat"）
    pub name: String,

    /// 工藝類別
    pub class: Option<String>,

    /// 階級
    pub tier: Option<u32>,

    /// 所需原料
    #[serde(default)]
    pub inputs: Vec<Ingredient>,

    /// 產出物品
    #[serde(default)]
    pub outputs: Vec<Ingredient>,

    /// 每單位產出的基礎勞動力需求
    #[serde(default)]
    pub labor: Decimal,
}

impl Recipe {
    /// 創建新的配方
    pub fn new(name: impl Into<String>, labor: Decimal) -> Self {
        Self {
            name: name.into(),
            class: None,
            tier: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            labor,
        }
    }

    /// 建構器模式：添加原料
    pub fn with_input(mut self, product: impl Into<ItemId>, amount: Decimal) -> Self {
        self.inputs.push(Ingredient {
            product: product.into(),
            amount,
        });
        self
    }

    /// 建構器模式：添加產出
    pub fn with_output(mut self, product: impl Into<ItemId>, amount: Decimal) -> Self {
        self.outputs.push(Ingredient {
            product: product.into(),
            amount,
        });
        self
    }

    /// 取得某物品的原料需求
    pub fn input(&self, item: &ItemId) -> Option<&Ingredient> {
        self.inputs.iter().find(|i| &i.product == item)
    }

    /// 取得某物品的產出
    pub fn output(&self, item: &ItemId) -> Option<&Ingredient> {
        self.outputs.iter().find(|o| &o.product == item)
    }
}

/// 配方總表（按名稱索引，來自靜態遊戲資料）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeBook {
    /// 按名稱索引的配方
    #[serde(default)]
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// 創建空的配方總表
    pub fn new() -> Self {
        Self::default()
    }

    /// 從配方清單建立總表
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        Self {
            recipes: recipes
                .into_iter()
                .map(|r| (r.name.clone(), r))
                .collect(),
        }
    }

    /// 添加配方
    pub fn insert(&mut self, recipe: Recipe) {
        self.recipes.insert(recipe.name.clone(), recipe);
    }

    /// 查找配方（查無時回傳 `None`）
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// 取得配方（查無時回傳錯誤）
    pub fn get(&self, name: &str) -> Result<&Recipe> {
        self.find(name)
            .ok_or_else(|| MercError::RecipeNotFound(name.to_string()))
    }

    /// 配方數量
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// 是否為空
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
