use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tax applied on top of the bill subtotal. Fixed at 10%.
pub const TAX_RATE: f64 = 0.10;

/// Round a money amount to 2 decimal places.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Paid,
    Cancelled,
}

impl BillStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Paid => "paid",
            BillStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillStatus::Pending => "Pending",
            BillStatus::Paid => "Paid",
            BillStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BillStatus::Pending),
            "paid" => Some(BillStatus::Paid),
            "cancelled" => Some(BillStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> [BillStatus; 3] {
        [BillStatus::Pending, BillStatus::Paid, BillStatus::Cancelled]
    }
}

/// One charge line on a bill. The line amount is always derived from
/// quantity and rate, never stored or edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillItem {
    pub description: String,
    pub quantity: u32,
    pub rate: f64,
    pub category: String,
}

impl BillItem {
    pub fn amount(&self) -> f64 {
        round_money(self.quantity as f64 * self.rate)
    }
}

/// A guest bill. Subtotal, tax and total are derived from the items on
/// every read so they can never drift from the line data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    #[serde(rename = "bookingId")]
    pub booking_id: String,
    #[serde(rename = "guestId")]
    pub guest_id: String,
    #[serde(rename = "guestName")]
    pub guest_name: String,
    pub items: Vec<BillItem>,
    pub status: BillStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "paidAt")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Bill {
    pub fn subtotal(&self) -> f64 {
        round_money(self.items.iter().map(BillItem::amount).sum())
    }

    pub fn tax(&self) -> f64 {
        round_money(self.subtotal() * TAX_RATE)
    }

    pub fn total(&self) -> f64 {
        round_money(self.subtotal() + self.subtotal() * TAX_RATE)
    }

    pub fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.status = BillStatus::Paid;
        self.paid_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, rate: f64) -> BillItem {
        BillItem {
            description: "Room charge".into(),
            quantity,
            rate,
            category: "accommodation".into(),
        }
    }

    fn bill(items: Vec<BillItem>) -> Bill {
        Bill {
            id: "BILL-001".into(),
            booking_id: "b1".into(),
            guest_id: "g1".into(),
            guest_name: "John Carter".into(),
            items,
            status: BillStatus::Pending,
            created_at: Utc::now(),
            paid_at: None,
        }
    }

    #[test]
    fn line_amount_is_quantity_times_rate() {
        assert_eq!(item(3, 180.0).amount(), 540.0);
        assert_eq!(item(2, 12.75).amount(), 25.5);
    }

    #[test]
    fn totals_follow_ten_percent_tax() {
        // 3 nights at 180 plus 3 breakfasts at 15
        let b = bill(vec![item(3, 180.0), item(3, 15.0)]);
        assert_eq!(b.subtotal(), 585.0);
        assert_eq!(b.tax(), 58.5);
        assert_eq!(b.total(), 643.5);
    }

    #[test]
    fn total_rounds_to_two_decimals() {
        let b = bill(vec![item(1, 33.33)]);
        assert_eq!(b.subtotal(), 33.33);
        assert_eq!(b.tax(), 3.33);
        assert_eq!(b.total(), 36.66);
    }

    #[test]
    fn mark_paid_sets_status_and_timestamp() {
        let mut b = bill(vec![item(1, 100.0)]);
        let now = Utc::now();
        b.mark_paid(now);
        assert_eq!(b.status, BillStatus::Paid);
        assert_eq!(b.paid_at, Some(now));
    }
}
