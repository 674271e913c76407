use chrono::NaiveDate;
use contracts::domain::{InventoryCategory, InventoryItem};
use leptos::prelude::*;

use crate::shared::api_utils::{post_json, put_json, INVENTORY_ADD, INVENTORY_UPDATE};

/// Form state for the inventory editor. Numeric fields stay strings
/// until save, where they are coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryForm {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub current_stock: String,
    pub min_stock: String,
    pub max_stock: String,
    pub unit: String,
    pub cost: String,
    pub supplier: String,
    /// YYYY-MM-DD from the date input, empty when never restocked.
    pub last_restocked: String,
}

impl InventoryForm {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            category: item.category.as_str().to_string(),
            current_stock: item.current_stock.to_string(),
            min_stock: item.min_stock.to_string(),
            max_stock: item.max_stock.to_string(),
            unit: item.unit.clone(),
            cost: item.cost.to_string(),
            supplier: item.supplier.clone().unwrap_or_default(),
            last_restocked: item
                .last_restocked
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_item(&self) -> Result<InventoryItem, String> {
        let category = InventoryCategory::from_str(&self.category)
            .ok_or_else(|| "Select a category".to_string())?;
        if self.name.trim().is_empty() {
            return Err("Item name is required".to_string());
        }
        let current_stock: u32 = self
            .current_stock
            .trim()
            .parse()
            .map_err(|_| "Current stock must be a whole number".to_string())?;
        let min_stock: u32 = self
            .min_stock
            .trim()
            .parse()
            .map_err(|_| "Min stock must be a whole number".to_string())?;
        let max_stock: u32 = self
            .max_stock
            .trim()
            .parse()
            .map_err(|_| "Max stock must be a whole number".to_string())?;
        let cost: f64 = self
            .cost
            .trim()
            .parse()
            .map_err(|_| "Unit cost must be a number".to_string())?;
        if max_stock < min_stock {
            return Err("Max stock must not be below min stock".to_string());
        }
        let last_restocked = if self.last_restocked.trim().is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(self.last_restocked.trim(), "%Y-%m-%d")
                    .map_err(|_| "Last restocked must be a valid date".to_string())?,
            )
        };

        let mut item = InventoryItem::new(
            self.name.trim().to_string(),
            category,
            self.unit.trim().to_string(),
            cost,
        );
        if let Some(id) = &self.id {
            item.id = id.clone();
        }
        item.current_stock = current_stock;
        item.min_stock = min_stock;
        item.max_stock = max_stock;
        item.supplier = match self.supplier.trim() {
            "" => None,
            s => Some(s.to_string()),
        };
        item.last_restocked = last_restocked;
        Ok(item)
    }
}

#[derive(Clone)]
pub struct InventoryDetailsViewModel {
    pub form: RwSignal<InventoryForm>,
    pub error: RwSignal<Option<String>>,
}

impl InventoryDetailsViewModel {
    pub fn new(item: Option<InventoryItem>) -> Self {
        let form = match &item {
            Some(i) => InventoryForm::from_item(i),
            None => InventoryForm {
                current_stock: "0".to_string(),
                min_stock: "0".to_string(),
                max_stock: "0".to_string(),
                ..Default::default()
            },
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    /// Same contract as the room editor: local state is authoritative,
    /// the stubbed request is fire-and-forget.
    pub fn save_command(&self, on_saved: Callback<InventoryItem>) {
        let item = match self.form.get().to_item() {
            Ok(item) => item,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        self.error.set(None);

        let is_update = self.is_edit_mode();
        let payload = item.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if is_update {
                put_json(INVENTORY_UPDATE, &payload).await
            } else {
                post_json(INVENTORY_ADD, &payload).await
            };
            if let Err(e) = result {
                log::warn!("inventory save request failed (backend stub): {e}");
            }
        });

        on_saved.run(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InventoryForm {
        InventoryForm {
            id: None,
            name: "Bath towels".into(),
            category: "amenities".into(),
            current_stock: "40".into(),
            min_stock: "20".into(),
            max_stock: "80".into(),
            unit: "pcs".into(),
            cost: "4.5".into(),
            supplier: "  ".into(),
            last_restocked: "2026-08-12".into(),
        }
    }

    #[test]
    fn coerces_numeric_fields() {
        let item = valid_form().to_item().unwrap();
        assert_eq!(item.current_stock, 40);
        assert_eq!(item.min_stock, 20);
        assert_eq!(item.max_stock, 80);
        assert_eq!(item.cost, 4.5);
        assert_eq!(
            item.last_restocked,
            NaiveDate::from_ymd_opt(2026, 8, 12)
        );
    }

    #[test]
    fn blank_supplier_becomes_none() {
        let item = valid_form().to_item().unwrap();
        assert_eq!(item.supplier, None);
    }

    #[test]
    fn rejects_max_below_min() {
        let mut form = valid_form();
        form.max_stock = "10".into();
        assert!(form.to_item().is_err());
    }

    #[test]
    fn rejects_non_numeric_stock() {
        let mut form = valid_form();
        form.current_stock = "lots".into();
        assert!(form.to_item().is_err());
    }

    #[test]
    fn round_trips_existing_id() {
        let original = valid_form().to_item().unwrap();
        let again = InventoryForm::from_item(&original).to_item().unwrap();
        assert_eq!(again.id, original.id);
    }
}
