use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::room::RoomType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::CheckedIn => "Checked in",
            BookingStatus::CheckedOut => "Checked out",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(BookingStatus::Confirmed),
            "checked-in" => Some(BookingStatus::CheckedIn),
            "checked-out" => Some(BookingStatus::CheckedOut),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> [BookingStatus; 4] {
        [
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ]
    }
}

/// Meal package sold with the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingPackage {
    RoomOnly,
    BedBreakfast,
    HalfBoard,
    FullBoard,
}

impl BookingPackage {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingPackage::RoomOnly => "room-only",
            BookingPackage::BedBreakfast => "bed-breakfast",
            BookingPackage::HalfBoard => "half-board",
            BookingPackage::FullBoard => "full-board",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BookingPackage::RoomOnly => "Room only",
            BookingPackage::BedBreakfast => "Bed & breakfast",
            BookingPackage::HalfBoard => "Half board",
            BookingPackage::FullBoard => "Full board",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "room-only" => Some(BookingPackage::RoomOnly),
            "bed-breakfast" => Some(BookingPackage::BedBreakfast),
            "half-board" => Some(BookingPackage::HalfBoard),
            "full-board" => Some(BookingPackage::FullBoard),
            _ => None,
        }
    }

    pub fn all() -> [BookingPackage; 4] {
        [
            BookingPackage::RoomOnly,
            BookingPackage::BedBreakfast,
            BookingPackage::HalfBoard,
            BookingPackage::FullBoard,
        ]
    }
}

/// A stay reservation linking a guest to a room over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(rename = "guestId")]
    pub guest_id: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
    #[serde(rename = "roomType")]
    pub room_type: RoomType,
    #[serde(rename = "checkIn")]
    pub check_in: NaiveDate,
    #[serde(rename = "checkOut")]
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    /// Where the booking came from ("walk-in", "website", "phone", ...).
    pub source: String,
    pub package: BookingPackage,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

impl Booking {
    /// Number of nights in the stay. A reversed or zero-length range
    /// yields 0 rather than a negative count.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}

/// Envelope posted to the (not yet built) booking endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingEnvelope {
    pub guest: super::guest::Guest,
    pub booking: Booking,
}

impl Booking {
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(check_in: NaiveDate, check_out: NaiveDate) -> Booking {
        Booking {
            id: "b1".into(),
            guest_id: "g1".into(),
            room_id: "r1".into(),
            room_type: RoomType::Double,
            check_in,
            check_out,
            status: BookingStatus::Confirmed,
            source: "website".into(),
            package: BookingPackage::BedBreakfast,
            total_amount: 0.0,
        }
    }

    #[test]
    fn nights_counts_whole_days() {
        let b = booking(date(2025, 9, 20), date(2025, 9, 23));
        assert_eq!(b.nights(), 3);
    }

    #[test]
    fn reversed_range_yields_zero_nights() {
        let b = booking(date(2025, 9, 23), date(2025, 9, 20));
        assert_eq!(b.nights(), 0);
    }
}
