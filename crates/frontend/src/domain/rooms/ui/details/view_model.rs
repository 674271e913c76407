use contracts::domain::{Room, RoomStatus, RoomType};
use leptos::prelude::*;

use crate::shared::api_utils::{post_json, put_json, ROOMS_ADD, ROOMS_UPDATE};

/// Form state for the room editor. Numeric fields are kept as strings
/// until save, where they are coerced the way the API expects them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomForm {
    pub id: Option<String>,
    pub number: String,
    pub room_type: String,
    pub status: String,
    pub rate: String,
    pub max_occupancy: String,
    pub floor: String,
    /// Comma-separated in the form, split on save.
    pub amenities: String,
}

impl RoomForm {
    pub fn from_room(room: &Room) -> Self {
        Self {
            id: Some(room.id.clone()),
            number: room.number.clone(),
            room_type: room.room_type.as_str().to_string(),
            status: room.status.as_str().to_string(),
            rate: room.rate.to_string(),
            max_occupancy: room.max_occupancy.to_string(),
            floor: room.floor.to_string(),
            amenities: room.amenities.join(", "),
        }
    }

    /// Coerce the form into a record. Field errors come back as a single
    /// message; the form stays open for correction.
    pub fn to_room(&self) -> Result<Room, String> {
        let room_type = RoomType::from_str(&self.room_type)
            .ok_or_else(|| "Select a room type".to_string())?;
        let status =
            RoomStatus::from_str(&self.status).ok_or_else(|| "Select a status".to_string())?;
        let rate: f64 = self
            .rate
            .trim()
            .parse()
            .map_err(|_| "Rate must be a number".to_string())?;
        let max_occupancy: u32 = self
            .max_occupancy
            .trim()
            .parse()
            .map_err(|_| "Max occupancy must be a whole number".to_string())?;
        let floor: u32 = self
            .floor
            .trim()
            .parse()
            .map_err(|_| "Floor must be a whole number".to_string())?;
        if self.number.trim().is_empty() {
            return Err("Room number is required".to_string());
        }
        if max_occupancy < 1 {
            return Err("Max occupancy must be at least 1".to_string());
        }

        let mut room = Room::new(self.number.trim().to_string(), room_type, rate, floor);
        if let Some(id) = &self.id {
            room.id = id.clone();
        }
        room.status = status;
        room.max_occupancy = max_occupancy;
        room.amenities = self
            .amenities
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();
        Ok(room)
    }
}

#[derive(Clone)]
pub struct RoomDetailsViewModel {
    pub form: RwSignal<RoomForm>,
    pub error: RwSignal<Option<String>>,
}

impl RoomDetailsViewModel {
    pub fn new(room: Option<Room>) -> Self {
        let form = match &room {
            Some(r) => RoomForm::from_room(r),
            None => RoomForm {
                status: RoomStatus::Available.as_str().to_string(),
                max_occupancy: "1".to_string(),
                floor: "1".to_string(),
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

    /// Validate, fire the stubbed request and hand the record back to the
    /// list. The backend does not exist yet, so local state stays
    /// authoritative and a failed request is only logged.
    pub fn save_command(&self, on_saved: Callback<Room>) {
        let room = match self.form.get().to_room() {
            Ok(room) => room,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };
        self.error.set(None);

        let is_update = self.is_edit_mode();
        let payload = room.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if is_update {
                put_json(ROOMS_UPDATE, &payload).await
            } else {
                post_json(ROOMS_ADD, &payload).await
            };
            if let Err(e) = result {
                log::warn!("room save request failed (backend stub): {e}");
            }
        });

        on_saved.run(room);
    }
}
