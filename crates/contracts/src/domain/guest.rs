use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A hotel guest. Created ad hoc at check-in; nothing enforces uniqueness
/// of name or email across guests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: Option<String>,
    pub preferences: Option<String>,
    #[serde(rename = "bookingHistory", default)]
    pub booking_history: Vec<String>,
}

impl Guest {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            nationality: None,
            preferences: None,
            booking_history: Vec::new(),
        }
    }
}
