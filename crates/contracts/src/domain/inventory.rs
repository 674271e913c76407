use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryCategory {
    Food,
    Beverage,
    Cleaning,
    Amenities,
    Other,
}

impl InventoryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InventoryCategory::Food => "food",
            InventoryCategory::Beverage => "beverage",
            InventoryCategory::Cleaning => "cleaning",
            InventoryCategory::Amenities => "amenities",
            InventoryCategory::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InventoryCategory::Food => "Food",
            InventoryCategory::Beverage => "Beverage",
            InventoryCategory::Cleaning => "Cleaning",
            InventoryCategory::Amenities => "Amenities",
            InventoryCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "food" => Some(InventoryCategory::Food),
            "beverage" => Some(InventoryCategory::Beverage),
            "cleaning" => Some(InventoryCategory::Cleaning),
            "amenities" => Some(InventoryCategory::Amenities),
            "other" => Some(InventoryCategory::Other),
            _ => None,
        }
    }

    pub fn all() -> [InventoryCategory; 5] {
        [
            InventoryCategory::Food,
            InventoryCategory::Beverage,
            InventoryCategory::Cleaning,
            InventoryCategory::Amenities,
            InventoryCategory::Other,
        ]
    }
}

/// Derived stock classification. Every item resolves to exactly one
/// variant: low wins at the min threshold, high at 90% of max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Low => "low",
            StockStatus::Normal => "normal",
            StockStatus::High => "high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low",
            StockStatus::Normal => "Normal",
            StockStatus::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(StockStatus::Low),
            "normal" => Some(StockStatus::Normal),
            "high" => Some(StockStatus::High),
            _ => None,
        }
    }

    pub fn all() -> [StockStatus; 3] {
        [StockStatus::Low, StockStatus::Normal, StockStatus::High]
    }
}

/// A stocked consumable tracked by housekeeping or the kitchen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    #[serde(rename = "currentStock")]
    pub current_stock: u32,
    #[serde(rename = "minStock")]
    pub min_stock: u32,
    #[serde(rename = "maxStock")]
    pub max_stock: u32,
    pub unit: String,
    /// Unit cost in the hotel currency.
    pub cost: f64,
    pub supplier: Option<String>,
    #[serde(rename = "lastRestocked")]
    pub last_restocked: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn new(name: String, category: InventoryCategory, unit: String, cost: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            current_stock: 0,
            min_stock: 0,
            max_stock: 0,
            unit,
            cost,
            supplier: None,
            last_restocked: None,
        }
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock <= self.min_stock {
            StockStatus::Low
        } else if self.current_stock as f64 >= 0.9 * self.max_stock as f64 {
            StockStatus::High
        } else {
            StockStatus::Normal
        }
    }

    /// Value of the stock on hand.
    pub fn stock_value(&self) -> f64 {
        self.current_stock as f64 * self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: u32, min: u32, max: u32) -> InventoryItem {
        InventoryItem {
            current_stock: current,
            min_stock: min,
            max_stock: max,
            ..InventoryItem::new(
                "Towels".into(),
                InventoryCategory::Amenities,
                "pcs".into(),
                4.5,
            )
        }
    }

    #[test]
    fn at_or_below_min_is_low() {
        assert_eq!(item(8, 20, 80).stock_status(), StockStatus::Low);
        assert_eq!(item(20, 20, 80).stock_status(), StockStatus::Low);
    }

    #[test]
    fn at_ninety_percent_of_max_is_high() {
        // 72 == 0.9 * 80, boundary included
        assert_eq!(item(72, 20, 80).stock_status(), StockStatus::High);
        assert_eq!(item(80, 20, 80).stock_status(), StockStatus::High);
    }

    #[test]
    fn between_thresholds_is_normal() {
        assert_eq!(item(21, 20, 80).stock_status(), StockStatus::Normal);
        assert_eq!(item(71, 20, 80).stock_status(), StockStatus::Normal);
    }

    #[test]
    fn classification_is_total_over_valid_triples() {
        for min in 0..=10u32 {
            for max in min..=10u32 {
                for current in 0..=12u32 {
                    // exactly one variant, never a panic
                    let _ = item(current, min, max).stock_status();
                }
            }
        }
    }
}
