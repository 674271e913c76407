use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bill::round_money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuCategory {
    Breakfast,
    MainCourse,
    Dessert,
    Beverage,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "breakfast",
            MenuCategory::MainCourse => "main-course",
            MenuCategory::Dessert => "dessert",
            MenuCategory::Beverage => "beverage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Breakfast => "Breakfast",
            MenuCategory::MainCourse => "Main course",
            MenuCategory::Dessert => "Dessert",
            MenuCategory::Beverage => "Beverage",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(MenuCategory::Breakfast),
            "main-course" => Some(MenuCategory::MainCourse),
            "dessert" => Some(MenuCategory::Dessert),
            "beverage" => Some(MenuCategory::Beverage),
            _ => None,
        }
    }

    pub fn all() -> [MenuCategory; 4] {
        [
            MenuCategory::Breakfast,
            MenuCategory::MainCourse,
            MenuCategory::Dessert,
            MenuCategory::Beverage,
        ]
    }
}

/// A dish or drink on the dining menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: MenuCategory,
    pub description: String,
    pub ingredients: Vec<String>,
    pub price: f64,
    /// Percentage discount currently applied, if any.
    pub discount: Option<f64>,
    pub available: bool,
    pub image: Option<String>,
}

impl MenuItem {
    pub fn new(name: String, category: MenuCategory, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            description: String::new(),
            ingredients: Vec::new(),
            price,
            discount: None,
            available: true,
            image: None,
        }
    }

    /// Price after the percentage discount, rounded to 2 decimals.
    pub fn effective_price(&self) -> f64 {
        match self.discount {
            Some(pct) => round_money(self.price * (1.0 - pct / 100.0)),
            None => self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_applies_percentage_discount() {
        let mut item = MenuItem::new("Pancakes".into(), MenuCategory::Breakfast, 12.0);
        assert_eq!(item.effective_price(), 12.0);
        item.discount = Some(25.0);
        assert_eq!(item.effective_price(), 9.0);
    }
}
