//! Seed data used until the backend exists.
//!
//! Kept out of the UI components so the filter engine and wizard can be
//! exercised against the same records the pages render.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{
    Bill, BillItem, BillStatus, Booking, BookingPackage, BookingStatus, Guest, InventoryCategory,
    InventoryItem, MenuCategory, MenuItem, Room, RoomStatus, RoomType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn room(
    id: &str,
    number: &str,
    room_type: RoomType,
    status: RoomStatus,
    rate: f64,
    amenities: &[&str],
    max_occupancy: u32,
    floor: u32,
) -> Room {
    Room {
        id: id.to_string(),
        number: number.to_string(),
        room_type,
        status,
        rate,
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        max_occupancy,
        floor,
    }
}

pub fn seed_rooms() -> Vec<Room> {
    vec![
        room("room-1", "101", RoomType::Single, RoomStatus::Available, 90.0, &["wifi", "tv"], 1, 1),
        room("room-2", "102", RoomType::Double, RoomStatus::Occupied, 140.0, &["wifi", "tv", "minibar"], 2, 1),
        room("room-3", "103", RoomType::Double, RoomStatus::Cleaning, 140.0, &["wifi", "tv"], 2, 1),
        room("room-4", "104", RoomType::Single, RoomStatus::Reserved, 95.0, &["wifi"], 1, 1),
        room("room-5", "201", RoomType::Suite, RoomStatus::Available, 320.0, &["wifi", "tv", "minibar", "balcony"], 3, 2),
        room("room-6", "202", RoomType::Family, RoomStatus::Occupied, 210.0, &["wifi", "tv", "kitchenette"], 4, 2),
        room("room-7", "203", RoomType::Double, RoomStatus::Maintenance, 140.0, &["wifi", "tv"], 2, 2),
        room("room-8", "301", RoomType::Suite, RoomStatus::Reserved, 350.0, &["wifi", "tv", "minibar", "jacuzzi"], 3, 3),
    ]
}

pub fn seed_guests() -> Vec<Guest> {
    vec![
        Guest {
            id: "guest-1".into(),
            name: "John Carter".into(),
            email: "john.carter@example.com".into(),
            phone: "+1 202 555 0134".into(),
            nationality: Some("US".into()),
            preferences: Some("High floor".into()),
            booking_history: vec!["booking-1".into()],
        },
        Guest {
            id: "guest-2".into(),
            name: "Amira Hassan".into(),
            email: "amira.h@example.com".into(),
            phone: "+20 100 555 0188".into(),
            nationality: Some("EG".into()),
            preferences: None,
            booking_history: vec!["booking-2".into(), "booking-3".into()],
        },
        Guest {
            id: "guest-3".into(),
            name: "Lukas Meier".into(),
            email: "lukas.meier@example.com".into(),
            phone: "+41 79 555 0102".into(),
            nationality: Some("CH".into()),
            preferences: Some("Vegetarian breakfast".into()),
            booking_history: vec![],
        },
    ]
}

pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "booking-1".into(),
            guest_id: "guest-1".into(),
            room_id: "room-2".into(),
            room_type: RoomType::Double,
            check_in: date(2025, 9, 20),
            check_out: date(2025, 9, 23),
            status: BookingStatus::CheckedIn,
            source: "website".into(),
            package: BookingPackage::BedBreakfast,
            total_amount: 643.5,
        },
        Booking {
            id: "booking-2".into(),
            guest_id: "guest-2".into(),
            room_id: "room-8".into(),
            room_type: RoomType::Suite,
            check_in: date(2025, 10, 2),
            check_out: date(2025, 10, 6),
            status: BookingStatus::Confirmed,
            source: "phone".into(),
            package: BookingPackage::HalfBoard,
            total_amount: 1694.0,
        },
        Booking {
            id: "booking-3".into(),
            guest_id: "guest-2".into(),
            room_id: "room-4".into(),
            room_type: RoomType::Single,
            check_in: date(2025, 8, 11),
            check_out: date(2025, 8, 12),
            status: BookingStatus::CheckedOut,
            source: "walk-in".into(),
            package: BookingPackage::RoomOnly,
            total_amount: 104.5,
        },
        Booking {
            id: "booking-4".into(),
            guest_id: "guest-3".into(),
            room_id: "room-6".into(),
            room_type: RoomType::Family,
            check_in: date(2025, 9, 28),
            check_out: date(2025, 9, 30),
            status: BookingStatus::Cancelled,
            source: "website".into(),
            package: BookingPackage::FullBoard,
            total_amount: 561.0,
        },
    ]
}

fn bill_item(description: &str, quantity: u32, rate: f64, category: &str) -> BillItem {
    BillItem {
        description: description.to_string(),
        quantity,
        rate,
        category: category.to_string(),
    }
}

pub fn seed_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "BILL-001".into(),
            booking_id: "booking-1".into(),
            guest_id: "guest-1".into(),
            guest_name: "John Carter".into(),
            items: vec![
                bill_item("Double room, 3 nights", 3, 180.0, "accommodation"),
                bill_item("Breakfast", 3, 15.0, "dining"),
            ],
            status: BillStatus::Pending,
            created_at: datetime(2025, 9, 23, 9, 15),
            paid_at: None,
        },
        Bill {
            id: "BILL-002".into(),
            booking_id: "booking-3".into(),
            guest_id: "guest-2".into(),
            guest_name: "Amira Hassan".into(),
            items: vec![
                bill_item("Single room, 1 night", 1, 95.0, "accommodation"),
                bill_item("Minibar", 2, 6.5, "dining"),
            ],
            status: BillStatus::Paid,
            created_at: datetime(2025, 8, 12, 11, 40),
            paid_at: Some(datetime(2025, 8, 12, 11, 55)),
        },
        Bill {
            id: "BILL-003".into(),
            booking_id: "booking-4".into(),
            guest_id: "guest-3".into(),
            guest_name: "Lukas Meier".into(),
            items: vec![bill_item("Family room, 2 nights", 2, 210.0, "accommodation")],
            status: BillStatus::Cancelled,
            created_at: datetime(2025, 9, 21, 17, 5),
            paid_at: None,
        },
    ]
}

fn inventory_item(
    id: &str,
    name: &str,
    category: InventoryCategory,
    current: u32,
    min: u32,
    max: u32,
    unit: &str,
    cost: f64,
    supplier: Option<&str>,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        current_stock: current,
        min_stock: min,
        max_stock: max,
        unit: unit.to_string(),
        cost,
        supplier: supplier.map(str::to_string),
        last_restocked: Some(date(2025, 9, 15)),
    }
}

pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        inventory_item("inv-1", "Coffee beans", InventoryCategory::Beverage, 8, 20, 80, "kg", 14.0, Some("Aromatico Ltd")),
        inventory_item("inv-2", "Bath towels", InventoryCategory::Amenities, 120, 40, 200, "pcs", 6.5, Some("LinenWorks")),
        inventory_item("inv-3", "All-purpose cleaner", InventoryCategory::Cleaning, 72, 10, 80, "l", 3.2, None),
        inventory_item("inv-4", "Breakfast eggs", InventoryCategory::Food, 180, 60, 400, "pcs", 0.3, Some("Greenfield Farm")),
        inventory_item("inv-5", "Shampoo bottles", InventoryCategory::Amenities, 35, 50, 300, "pcs", 1.1, Some("LinenWorks")),
        inventory_item("inv-6", "Sparkling water", InventoryCategory::Beverage, 95, 30, 100, "bottles", 0.9, None),
    ]
}

fn menu_item(
    id: &str,
    name: &str,
    category: MenuCategory,
    description: &str,
    ingredients: &[&str],
    price: f64,
    discount: Option<f64>,
    available: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        description: description.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        price,
        discount,
        available,
        image: None,
    }
}

pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        menu_item("menu-1", "Continental breakfast", MenuCategory::Breakfast, "Pastries, fruit, coffee", &["croissant", "fruit", "coffee"], 15.0, None, true),
        menu_item("menu-2", "Grilled salmon", MenuCategory::MainCourse, "With seasonal vegetables", &["salmon", "vegetables", "lemon"], 28.5, None, true),
        menu_item("menu-3", "Mushroom risotto", MenuCategory::MainCourse, "Arborio rice, porcini", &["rice", "mushrooms", "parmesan"], 19.0, Some(15.0), true),
        menu_item("menu-4", "Tiramisu", MenuCategory::Dessert, "House-made", &["mascarpone", "espresso", "cocoa"], 8.0, None, false),
        menu_item("menu-5", "Fresh orange juice", MenuCategory::Beverage, "Squeezed to order", &["oranges"], 4.5, None, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_reference_each_other() {
        let guest_ids: Vec<String> = seed_guests().into_iter().map(|g| g.id).collect();
        let room_ids: Vec<String> = seed_rooms().into_iter().map(|r| r.id).collect();
        for booking in seed_bookings() {
            assert!(guest_ids.contains(&booking.guest_id));
            assert!(room_ids.contains(&booking.room_id));
        }
    }

    #[test]
    fn seeded_bill_totals_are_consistent() {
        let bills = seed_bills();
        assert_eq!(bills[0].subtotal(), 585.0);
        assert_eq!(bills[0].tax(), 58.5);
        assert_eq!(bills[0].total(), 643.5);
    }

    // Memoized list state diffs whole records; every seed type must
    // support value equality.
    #[test]
    fn seed_records_compare_by_value() {
        assert_eq!(seed_rooms(), seed_rooms());
        assert_eq!(seed_guests(), seed_guests());
        assert_eq!(seed_bookings(), seed_bookings());
        assert_eq!(seed_bills(), seed_bills());
        assert_eq!(seed_inventory(), seed_inventory());
        assert_eq!(seed_menu(), seed_menu());
    }
}
