//! Aggregate statistics ("stats bags") for the dashboard stat cards.
//!
//! Stats are always computed over the full, unfiltered collection: the
//! cards above a list keep showing whole-hotel numbers while the list
//! itself narrows with the active filters. The "Showing N of M" caption
//! is the only place the two meet.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Bill, BillStatus, Booking, BookingStatus, InventoryCategory, InventoryItem, MenuItem, Room,
    RoomStatus, StockStatus,
};

/// How to format a numeric stat on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of a stat card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
    pub maintenance: usize,
    /// Occupied share of all rooms, 0..=100.
    pub occupancy_rate: f64,
}

impl RoomStats {
    pub fn compute(rooms: &[Room]) -> Self {
        let count = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count();
        let total = rooms.len();
        let occupied = count(RoomStatus::Occupied);
        Self {
            total,
            available: count(RoomStatus::Available),
            occupied,
            reserved: count(RoomStatus::Reserved),
            cleaning: count(RoomStatus::Cleaning),
            maintenance: count(RoomStatus::Maintenance),
            occupancy_rate: if total == 0 {
                0.0
            } else {
                occupied as f64 / total as f64 * 100.0
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillStats {
    pub total: usize,
    pub pending: usize,
    pub paid: usize,
    pub cancelled: usize,
    /// Sum of totals over paid bills.
    pub paid_revenue: f64,
    /// Sum of totals over pending bills.
    pub pending_amount: f64,
}

impl BillStats {
    pub fn compute(bills: &[Bill]) -> Self {
        let count = |status: BillStatus| bills.iter().filter(|b| b.status == status).count();
        let sum = |status: BillStatus| -> f64 {
            bills
                .iter()
                .filter(|b| b.status == status)
                .map(Bill::total)
                .sum()
        };
        Self {
            total: bills.len(),
            pending: count(BillStatus::Pending),
            paid: count(BillStatus::Paid),
            cancelled: count(BillStatus::Cancelled),
            paid_revenue: sum(BillStatus::Paid),
            pending_amount: sum(BillStatus::Pending),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total: usize,
    pub low_stock: usize,
    pub high_stock: usize,
    /// Value of all stock on hand.
    pub stock_value: f64,
    /// Item count per category, in `InventoryCategory::all()` order.
    pub category_counts: Vec<(InventoryCategory, usize)>,
}

impl InventoryStats {
    pub fn compute(items: &[InventoryItem]) -> Self {
        Self {
            total: items.len(),
            low_stock: items
                .iter()
                .filter(|i| i.stock_status() == StockStatus::Low)
                .count(),
            high_stock: items
                .iter()
                .filter(|i| i.stock_status() == StockStatus::High)
                .count(),
            stock_value: items.iter().map(InventoryItem::stock_value).sum(),
            category_counts: InventoryCategory::all()
                .into_iter()
                .map(|c| (c, items.iter().filter(|i| i.category == c).count()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub cancelled: usize,
    /// Sum of amounts over non-cancelled bookings.
    pub booked_revenue: f64,
}

impl BookingStats {
    pub fn compute(bookings: &[Booking]) -> Self {
        let count = |status: BookingStatus| {
            bookings.iter().filter(|b| b.status == status).count()
        };
        Self {
            total: bookings.len(),
            confirmed: count(BookingStatus::Confirmed),
            checked_in: count(BookingStatus::CheckedIn),
            checked_out: count(BookingStatus::CheckedOut),
            cancelled: count(BookingStatus::Cancelled),
            booked_revenue: bookings
                .iter()
                .filter(|b| b.status != BookingStatus::Cancelled)
                .map(|b| b.total_amount)
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuStats {
    pub total: usize,
    pub available: usize,
    pub discounted: usize,
}

impl MenuStats {
    pub fn compute(items: &[MenuItem]) -> Self {
        Self {
            total: items.len(),
            available: items.iter().filter(|i| i.available).count(),
            discounted: items.iter().filter(|i| i.discount.is_some()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoomType, StockStatus};
    use crate::filters::{filter_records, RecordFilter, RoomFilter};

    fn room(number: &str, status: RoomStatus) -> Room {
        Room {
            status,
            ..Room::new(number.into(), RoomType::Double, 100.0, 1)
        }
    }

    #[test]
    fn room_stats_count_every_status() {
        let rooms = vec![
            room("101", RoomStatus::Available),
            room("102", RoomStatus::Occupied),
            room("103", RoomStatus::Occupied),
            room("104", RoomStatus::Maintenance),
        ];
        let stats = RoomStats::compute(&rooms);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 1);
        assert_eq!(stats.occupied, 2);
        assert_eq!(stats.maintenance, 1);
        assert_eq!(stats.occupancy_rate, 50.0);
    }

    #[test]
    fn stats_ignore_active_filters() {
        let rooms = vec![
            room("101", RoomStatus::Available),
            room("102", RoomStatus::Occupied),
        ];
        let filter = RoomFilter {
            status: Some(RoomStatus::Available),
            ..Default::default()
        };
        let filtered = filter_records(&rooms, &filter);
        // the list narrows, the stats bag does not
        assert_eq!(filtered.len(), 1);
        assert_eq!(RoomStats::compute(&rooms).total, 2);
        assert!(filter.active_count() > 0);
    }

    #[test]
    fn empty_collection_has_zero_occupancy() {
        assert_eq!(RoomStats::compute(&[]).occupancy_rate, 0.0);
    }

    #[test]
    fn inventory_stats_use_derived_status() {
        let mut low = crate::domain::InventoryItem::new(
            "Napkins".into(),
            crate::domain::InventoryCategory::Other,
            "pcs".into(),
            0.5,
        );
        low.current_stock = 5;
        low.min_stock = 10;
        low.max_stock = 100;
        assert_eq!(low.stock_status(), StockStatus::Low);
        let stats = InventoryStats::compute(&[low.clone()]);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.stock_value, 2.5);
        let other_count = stats
            .category_counts
            .iter()
            .find(|(c, _)| *c == crate::domain::InventoryCategory::Other)
            .map(|(_, n)| *n);
        assert_eq!(other_count, Some(1));
    }
}
