use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room category offered by the hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Family,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Suite => "suite",
            RoomType::Family => "family",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Double => "Double",
            RoomType::Suite => "Suite",
            RoomType::Family => "Family",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(RoomType::Single),
            "double" => Some(RoomType::Double),
            "suite" => Some(RoomType::Suite),
            "family" => Some(RoomType::Family),
            _ => None,
        }
    }

    pub fn all() -> [RoomType; 4] {
        [
            RoomType::Single,
            RoomType::Double,
            RoomType::Suite,
            RoomType::Family,
        ]
    }
}

/// Housekeeping / occupancy state of a room.
///
/// Transitions are deliberately unconstrained: the front desk may set any
/// status from any other status directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Reserved => "reserved",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Reserved => "Reserved",
            RoomStatus::Cleaning => "Cleaning",
            RoomStatus::Maintenance => "Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "available" => Some(RoomStatus::Available),
            "occupied" => Some(RoomStatus::Occupied),
            "reserved" => Some(RoomStatus::Reserved),
            "cleaning" => Some(RoomStatus::Cleaning),
            "maintenance" => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }

    pub fn all() -> [RoomStatus; 5] {
        [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Reserved,
            RoomStatus::Cleaning,
            RoomStatus::Maintenance,
        ]
    }
}

/// A single hotel room in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    /// Nightly rate in the hotel currency.
    pub rate: f64,
    pub amenities: Vec<String>,
    #[serde(rename = "maxOccupancy")]
    pub max_occupancy: u32,
    pub floor: u32,
}

impl Room {
    pub fn new(number: String, room_type: RoomType, rate: f64, floor: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            number,
            room_type,
            status: RoomStatus::Available,
            rate,
            amenities: Vec::new(),
            max_occupancy: 1,
            floor,
        }
    }
}
