//! 市場模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::ItemId;

/// 市場掛單（買單或賣單）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOrder {
    /// 數量
    pub volume: i64,

    /// 單價
    pub price: Decimal,
}

/// 單一物品的市場統計
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketItemData {
    /// 最新成交價
    pub price: Option<Decimal>,

    /// 前次成交價
    pub last_price: Option<Decimal>,

    /// 平均成交價
    pub average_price: Option<Decimal>,

    /// 移動平均價
    pub moving_average: Option<Decimal>,

    /// 最高買價
    pub highest_bid: Option<Decimal>,

    /// 最低賣價
    pub lowest_ask: Option<Decimal>,

    /// 成交量
    #[serde(default)]
    pub volume: i64,
}

/// 單一物品的市場明細（含買賣盤）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketItemDetails {
    /// 市場項ID
    pub id: i64,

    /// 物品
    pub product: ItemId,

    /// 計價貨幣
    pub currency: Option<String>,

    /// 買盤（出價收購）
    #[serde(default)]
    pub bids: Vec<ItemOrder>,

    /// 賣盤（掛價出售）
    #[serde(default)]
    pub asks: Vec<ItemOrder>,

    /// 市場統計
    #[serde(default)]
    pub data: MarketItemData,
}

impl MarketItemDetails {
    /// 最佳買單（價格最高者）
    pub fn best_bid(&self) -> Option<&ItemOrder> {
        self.bids.iter().max_by_key(|order| order.price)
    }

    /// 最佳賣單（價格最低者）
    pub fn best_ask(&self) -> Option<&ItemOrder> {
        self.asks.iter().min_by_key(|order| order.price)
    }

    /// 買賣價差（需要買賣盤皆非空）
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }

    /// 買盤總量
    pub fn bid_volume(&self) -> i64 {
        self.bids.iter().map(|order| order.volume).sum()
    }

    /// 賣盤總量
    pub fn ask_volume(&self) -> i64 {
        self.asks.iter().map(|order| order.volume).sum()
    }
}
