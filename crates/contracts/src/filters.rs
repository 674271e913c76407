//! Client-side filtering for the list views.
//!
//! Every list page combines its active predicates with logical AND over
//! the in-memory collection. Filtering is pure and order-preserving; the
//! stat cards next to the lists deliberately ignore these filters (see
//! [`crate::stats`]).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Bill, BillStatus, Booking, BookingStatus, InventoryCategory, InventoryItem, MenuCategory,
    MenuItem, Room, RoomStatus, RoomType, StockStatus,
};

/// A set of predicates applicable to one record type.
///
/// `clear` resets every predicate to its default in one step; there are
/// no partial-clear semantics anywhere in the UI.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
    fn clear(&mut self);
    /// Number of predicates currently narrowing the list (drives the
    /// badge on the filter panel).
    fn active_count(&self) -> usize;
}

/// Apply a filter to a collection, preserving the input order.
pub fn filter_records<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Case-insensitive substring match. An empty needle matches everything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// Date buckets
// ============================================================================

/// Relative date window for the billing list, evaluated against the bill
/// creation date and a caller-supplied reference day.
///
/// `Today` is calendar-day equality, not a rolling 24h window: a bill
/// created at 23:59 leaves the bucket one minute later when the calendar
/// day rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateBucket::All => "all",
            DateBucket::Today => "today",
            DateBucket::ThisWeek => "this-week",
            DateBucket::ThisMonth => "this-month",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateBucket::All => "All time",
            DateBucket::Today => "Today",
            DateBucket::ThisWeek => "This week",
            DateBucket::ThisMonth => "This month",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "today" => DateBucket::Today,
            "this-week" => DateBucket::ThisWeek,
            "this-month" => DateBucket::ThisMonth,
            _ => DateBucket::All,
        }
    }

    pub fn all() -> [DateBucket; 4] {
        [
            DateBucket::All,
            DateBucket::Today,
            DateBucket::ThisWeek,
            DateBucket::ThisMonth,
        ]
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateBucket::All => true,
            DateBucket::Today => date == today,
            DateBucket::ThisWeek => date.iso_week() == today.iso_week(),
            DateBucket::ThisMonth => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// Filters for the room list. `None` on an enum predicate means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    pub search: String,
    pub status: Option<RoomStatus>,
    pub room_type: Option<RoomType>,
    /// Exact floor, kept as the raw dropdown string ("" = all).
    pub floor: String,
}

impl RecordFilter<Room> for RoomFilter {
    fn matches(&self, room: &Room) -> bool {
        contains_ci(&room.number, &self.search)
            && self.status.map_or(true, |s| room.status == s)
            && self.room_type.map_or(true, |t| room.room_type == t)
            && (self.floor.is_empty() || room.floor.to_string() == self.floor)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.room_type.is_some())
            + usize::from(!self.floor.is_empty())
    }
}

// ============================================================================
// Bills
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillFilter {
    /// Matches guest name or bill id.
    pub search: String,
    pub status: Option<BillStatus>,
    pub date_bucket: DateBucket,
    /// Reference day for the bucket test, normally "today" in local time.
    pub today: Option<NaiveDate>,
}

impl RecordFilter<Bill> for BillFilter {
    fn matches(&self, bill: &Bill) -> bool {
        let search_hit = contains_ci(&bill.guest_name, &self.search)
            || contains_ci(&bill.id, &self.search);
        let bucket_hit = match self.today {
            Some(today) => self
                .date_bucket
                .contains(bill.created_at.date_naive(), today),
            // No reference day means the bucket cannot narrow anything.
            None => true,
        };
        search_hit && self.status.map_or(true, |s| bill.status == s) && bucket_hit
    }

    fn clear(&mut self) {
        self.search.clear();
        self.status = None;
        self.date_bucket = DateBucket::All;
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.status.is_some())
            + usize::from(self.date_bucket != DateBucket::All)
    }
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    /// Matches item name or supplier.
    pub search: String,
    pub category: Option<InventoryCategory>,
    pub stock_level: Option<StockStatus>,
}

impl RecordFilter<InventoryItem> for InventoryFilter {
    fn matches(&self, item: &InventoryItem) -> bool {
        let search_hit = contains_ci(&item.name, &self.search)
            || item
                .supplier
                .as_deref()
                .map_or(false, |s| contains_ci(s, &self.search));
        search_hit
            && self.category.map_or(true, |c| item.category == c)
            && self.stock_level.map_or(true, |l| item.stock_status() == l)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.category.is_some())
            + usize::from(self.stock_level.is_some())
    }
}

// ============================================================================
// Bookings
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    /// Matches booking id or guest id.
    pub search: String,
    pub status: Option<BookingStatus>,
}

impl RecordFilter<Booking> for BookingFilter {
    fn matches(&self, booking: &Booking) -> bool {
        (contains_ci(&booking.id, &self.search) || contains_ci(&booking.guest_id, &self.search))
            && self.status.map_or(true, |s| booking.status == s)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty()) + usize::from(self.status.is_some())
    }
}

// ============================================================================
// Menu
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuFilter {
    pub search: String,
    pub category: Option<MenuCategory>,
    /// When set, show only items currently available for order.
    pub available_only: bool,
}

impl RecordFilter<MenuItem> for MenuFilter {
    fn matches(&self, item: &MenuItem) -> bool {
        contains_ci(&item.name, &self.search)
            && self.category.map_or(true, |c| item.category == c)
            && (!self.available_only || item.available)
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.category.is_some())
            + usize::from(self.available_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn utc(s: &str) -> chrono::DateTime<chrono::Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn room(number: &str, status: RoomStatus, room_type: RoomType, floor: u32) -> Room {
        Room {
            id: format!("room-{number}"),
            number: number.to_string(),
            room_type,
            status,
            rate: 120.0,
            amenities: vec![],
            max_occupancy: 2,
            floor,
        }
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            room("101", RoomStatus::Available, RoomType::Single, 1),
            room("102", RoomStatus::Occupied, RoomType::Double, 1),
            room("201", RoomStatus::Cleaning, RoomType::Suite, 2),
            room("202", RoomStatus::Available, RoomType::Double, 2),
        ]
    }

    #[test]
    fn default_filter_returns_everything_in_order() {
        let rooms = sample_rooms();
        let out = filter_records(&rooms, &RoomFilter::default());
        // whole-record equality, the same comparison the list memos use
        assert_eq!(out, rooms);
        let numbers: Vec<&str> = out.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["101", "102", "201", "202"]);
    }

    #[test]
    fn status_filter_keeps_only_matching_rooms() {
        let rooms = sample_rooms();
        let filter = RoomFilter {
            status: Some(RoomStatus::Available),
            ..Default::default()
        };
        let out = filter_records(&rooms, &filter);
        let numbers: Vec<&str> = out.iter().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["101", "202"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let rooms = sample_rooms();
        let filter = RoomFilter {
            status: Some(RoomStatus::Available),
            room_type: Some(RoomType::Double),
            ..Default::default()
        };
        let out = filter_records(&rooms, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].number, "202");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rooms = sample_rooms();
        let filter = RoomFilter {
            search: "0".into(),
            ..Default::default()
        };
        assert_eq!(filter_records(&rooms, &filter).len(), 4);
        let filter = RoomFilter {
            search: "20".into(),
            ..Default::default()
        };
        assert_eq!(filter_records(&rooms, &filter).len(), 2);
    }

    #[test]
    fn floor_matches_on_exact_string() {
        let rooms = sample_rooms();
        let filter = RoomFilter {
            floor: "2".into(),
            ..Default::default()
        };
        let out = filter_records(&rooms, &filter);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.floor == 2));
    }

    #[test]
    fn clear_resets_every_predicate_atomically() {
        let rooms = sample_rooms();
        let mut filter = RoomFilter {
            search: "101".into(),
            status: Some(RoomStatus::Occupied),
            room_type: Some(RoomType::Suite),
            floor: "3".into(),
        };
        assert_eq!(filter.active_count(), 4);
        filter.clear();
        assert_eq!(filter.active_count(), 0);
        assert_eq!(filter_records(&rooms, &filter).len(), rooms.len());
    }

    fn bill(id: &str, guest: &str, status: BillStatus, created: &str) -> Bill {
        Bill {
            id: id.to_string(),
            booking_id: "b1".into(),
            guest_id: "g1".into(),
            guest_name: guest.to_string(),
            items: vec![],
            status,
            created_at: utc(&format!("{created} 12:00:00")),
            paid_at: None,
        }
    }

    #[test]
    fn bill_search_matches_guest_name_or_id() {
        let bills = vec![
            bill("BILL-001", "John Carter", BillStatus::Pending, "2025-09-23"),
            bill("BILL-002", "Amira Hassan", BillStatus::Paid, "2025-09-23"),
        ];
        let filter = BillFilter {
            search: "carter".into(),
            ..Default::default()
        };
        assert_eq!(filter_records(&bills, &filter).len(), 1);
        let filter = BillFilter {
            search: "bill-002".into(),
            ..Default::default()
        };
        assert_eq!(filter_records(&bills, &filter)[0].id, "BILL-002");
    }

    #[test]
    fn today_bucket_is_calendar_day_equality() {
        let late = Bill {
            created_at: utc("2025-09-23 23:59:00"),
            ..bill("BILL-003", "John Carter", BillStatus::Pending, "2025-09-23")
        };
        let mut filter = BillFilter {
            date_bucket: DateBucket::Today,
            today: NaiveDate::from_ymd_opt(2025, 9, 23),
            ..Default::default()
        };
        assert!(filter.matches(&late));
        // two minutes later the calendar day has rolled over
        filter.today = NaiveDate::from_ymd_opt(2025, 9, 24);
        assert!(!filter.matches(&late));
    }

    #[test]
    fn week_and_month_buckets() {
        let b = bill("BILL-004", "John Carter", BillStatus::Pending, "2025-09-01");
        let same_week = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        let same_month = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert!(DateBucket::ThisWeek.contains(b.created_at.date_naive(), same_week));
        assert!(!DateBucket::ThisWeek.contains(b.created_at.date_naive(), same_month));
        assert!(DateBucket::ThisMonth.contains(b.created_at.date_naive(), same_month));
    }

    fn inv(name: &str, supplier: Option<&str>, current: u32, min: u32, max: u32) -> InventoryItem {
        InventoryItem {
            current_stock: current,
            min_stock: min,
            max_stock: max,
            supplier: supplier.map(str::to_string),
            ..InventoryItem::new(name.into(), InventoryCategory::Food, "kg".into(), 2.0)
        }
    }

    #[test]
    fn inventory_search_covers_supplier() {
        let items = vec![
            inv("Coffee beans", Some("Aromatico Ltd"), 30, 10, 100),
            inv("Flour", None, 30, 10, 100),
        ];
        let filter = InventoryFilter {
            search: "aromatico".into(),
            ..Default::default()
        };
        let out = filter_records(&items, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Coffee beans");
    }

    #[test]
    fn stock_level_filters_on_derived_status() {
        let items = vec![
            inv("Napkins", None, 8, 20, 80),
            inv("Soap", None, 40, 20, 80),
            inv("Shampoo", None, 72, 20, 80),
        ];
        let filter = InventoryFilter {
            stock_level: Some(StockStatus::Low),
            ..Default::default()
        };
        assert_eq!(filter_records(&items, &filter)[0].name, "Napkins");
        let filter = InventoryFilter {
            stock_level: Some(StockStatus::High),
            ..Default::default()
        };
        assert_eq!(filter_records(&items, &filter)[0].name, "Shampoo");
    }

    #[test]
    fn menu_availability_toggle() {
        let mut unavailable = MenuItem::new("Tiramisu".into(), MenuCategory::Dessert, 8.0);
        unavailable.available = false;
        let items = vec![
            MenuItem::new("Espresso".into(), MenuCategory::Beverage, 3.0),
            unavailable,
        ];
        let filter = MenuFilter {
            available_only: true,
            ..Default::default()
        };
        let out = filter_records(&items, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Espresso");
    }
}
