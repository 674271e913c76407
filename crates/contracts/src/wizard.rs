//! Booking wizard state machine.
//!
//! A linear four-step flow (guest info, booking details, preferences,
//! confirm) over one shared payload. Steps 1-3 advance unconditionally on
//! submit; the confirm step runs full-payload validation before the
//! simulated submission. Once confirmed the machine is terminal and the
//! caller's "Got it" close is the only way out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, BookingEnvelope, BookingPackage, BookingStatus, Guest, RoomType};

/// Dropdown placeholder values that count as "nothing selected".
pub const SENTINEL_NOT_SELECTED: &str = "Not selected";
pub const SENTINEL_SELECT_OPTION: &str = "Select an Option";

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 4;

// ============================================================================
// Payload sections
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestInfo {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    #[serde(rename = "roomType")]
    pub room_type: String,
    #[serde(rename = "checkIn")]
    pub check_in: String,
    #[serde(rename = "checkOut")]
    pub check_out: String,
    pub adults: u32,
    pub children: u32,
    pub rooms: u32,
}

impl Default for BookingDetails {
    fn default() -> Self {
        Self {
            room_type: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            adults: 1,
            children: 0,
            rooms: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "bedType")]
    pub bed_type: String,
    #[serde(rename = "mealPlan")]
    pub meal_plan: String,
    #[serde(rename = "specialRequests")]
    pub special_requests: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    #[serde(rename = "guestInfo")]
    pub guest_info: GuestInfo,
    #[serde(rename = "bookingDetails")]
    pub booking_details: BookingDetails,
    pub preferences: Preferences,
}

// ============================================================================
// Section patches
// ============================================================================

/// Explicit per-section patch records. Only `Some` fields overwrite;
/// `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestInfoPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDetailsPatch {
    pub room_type: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub rooms: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesPatch {
    pub bed_type: Option<String>,
    pub meal_plan: Option<String>,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionPatch {
    GuestInfo(GuestInfoPatch),
    BookingDetails(BookingDetailsPatch),
    Preferences(PreferencesPatch),
}

impl BookingData {
    /// Shallow per-section merge. An empty patch leaves the payload
    /// unchanged; applying the same patch twice is idempotent.
    pub fn apply(&mut self, patch: SectionPatch) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        match patch {
            SectionPatch::GuestInfo(p) => {
                merge(&mut self.guest_info.first_name, p.first_name);
                merge(&mut self.guest_info.last_name, p.last_name);
                merge(&mut self.guest_info.email, p.email);
                merge(&mut self.guest_info.phone, p.phone);
            }
            SectionPatch::BookingDetails(p) => {
                merge(&mut self.booking_details.room_type, p.room_type);
                merge(&mut self.booking_details.check_in, p.check_in);
                merge(&mut self.booking_details.check_out, p.check_out);
                merge(&mut self.booking_details.adults, p.adults);
                merge(&mut self.booking_details.children, p.children);
                merge(&mut self.booking_details.rooms, p.rooms);
            }
            SectionPatch::Preferences(p) => {
                merge(&mut self.preferences.bed_type, p.bed_type);
                merge(&mut self.preferences.meal_plan, p.meal_plan);
                merge(&mut self.preferences.special_requests, p.special_requests);
            }
        }
    }

    /// Nights between check-in and check-out. Missing or unparseable
    /// dates, and reversed ranges, yield 0.
    pub fn duration_nights(&self) -> i64 {
        duration_nights(&self.booking_details.check_in, &self.booking_details.check_out)
    }

    /// Package the validated payload as the `{guest, booking}` envelope
    /// the booking endpoint expects. The booking starts as confirmed
    /// with no room assigned and no price; both are set at the desk.
    pub fn to_envelope(&self) -> BookingEnvelope {
        let guest = Guest::new(
            format!(
                "{} {}",
                self.guest_info.first_name.trim(),
                self.guest_info.last_name.trim()
            )
            .trim()
            .to_string(),
            self.guest_info.email.clone(),
            self.guest_info.phone.clone(),
        );
        // The room-type select writes display names into the payload.
        let room_type = RoomType::all()
            .into_iter()
            .find(|t| t.display_name() == self.booking_details.room_type)
            .unwrap_or(RoomType::Single);
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default();
        let booking = Booking {
            id: Booking::new_id(),
            guest_id: guest.id.clone(),
            room_id: String::new(),
            room_type,
            check_in: parse(&self.booking_details.check_in),
            check_out: parse(&self.booking_details.check_out),
            status: BookingStatus::Confirmed,
            source: "dashboard".to_string(),
            package: package_from_meal_plan(&self.preferences.meal_plan),
            total_amount: 0.0,
        };
        BookingEnvelope { guest, booking }
    }
}

fn package_from_meal_plan(meal_plan: &str) -> BookingPackage {
    match meal_plan {
        "Breakfast included" => BookingPackage::BedBreakfast,
        "Half board" => BookingPackage::HalfBoard,
        "Full board" => BookingPackage::FullBoard,
        _ => BookingPackage::RoomOnly,
    }
}

pub fn duration_nights(check_in: &str, check_out: &str) -> i64 {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(check_in), parse(check_out)) {
        (Some(from), Some(to)) => (to - from).num_days().max(0),
        _ => 0,
    }
}

/// "1 adult" / "3 adults" style captions for the summary panel.
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn required(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("{label} is required"),
        }
    }
}

/// Mirrors the `^[^\s@]+@[^\s@]+\.[^\s@]+$` check: one `@`, no
/// whitespace, and a dot with non-empty segments inside the domain part.
pub fn email_is_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
            None => false,
        },
        _ => false,
    }
}

fn is_blank_or_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed == SENTINEL_NOT_SELECTED || trimmed == SENTINEL_SELECT_OPTION
}

/// Full-payload validation run by the confirm step.
pub fn validate_booking(data: &BookingData, terms_accepted: bool) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let required = [
        ("firstName", "First name", data.guest_info.first_name.as_str()),
        ("lastName", "Last name", data.guest_info.last_name.as_str()),
        ("email", "Email", data.guest_info.email.as_str()),
        ("phone", "Phone", data.guest_info.phone.as_str()),
        ("roomType", "Room type", data.booking_details.room_type.as_str()),
        ("checkIn", "Check-in date", data.booking_details.check_in.as_str()),
        ("checkOut", "Check-out date", data.booking_details.check_out.as_str()),
    ];
    for (field, label, value) in required {
        if is_blank_or_sentinel(value) {
            errors.push(ValidationError::required(field, label));
        }
    }
    if !is_blank_or_sentinel(&data.guest_info.email) && !email_is_valid(&data.guest_info.email) {
        errors.push(ValidationError {
            field: "email",
            message: "Enter a valid email address".to_string(),
        });
    }
    if !terms_accepted {
        errors.push(ValidationError {
            field: "terms",
            message: "Please accept the terms and conditions".to_string(),
        });
    }
    errors
}

// ============================================================================
// State machine
// ============================================================================

/// Reason a confirm attempt did not start a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmError {
    /// A previous confirm is still in flight; the click is dropped
    /// instead of double-submitting.
    AlreadySubmitting,
    Invalid(Vec<ValidationError>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingWizard {
    step: u8,
    pub data: BookingData,
    is_submitting: bool,
    is_confirmed: bool,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self {
            step: FIRST_STEP,
            data: BookingData::default(),
            is_submitting: false,
            is_confirmed: false,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }

    pub fn update(&mut self, patch: SectionPatch) {
        self.data.apply(patch);
    }

    /// Advance one step. Inert on the confirm step (which advances only
    /// through [`Self::begin_submit`]) and after confirmation.
    pub fn next_step(&mut self) {
        if !self.is_confirmed && self.step < LAST_STEP {
            self.step += 1;
        }
    }

    /// Go back one step, saturating at step 1. Inert once confirmed.
    pub fn prev_step(&mut self) {
        if !self.is_confirmed && self.step > FIRST_STEP {
            self.step -= 1;
        }
    }

    /// Validate the full payload and mark the submission in flight. The
    /// caller runs the (simulated) request and calls
    /// [`Self::complete_submit`] when it resolves.
    pub fn begin_submit(&mut self, terms_accepted: bool) -> Result<(), ConfirmError> {
        if self.is_submitting || self.is_confirmed {
            return Err(ConfirmError::AlreadySubmitting);
        }
        let errors = validate_booking(&self.data, terms_accepted);
        if !errors.is_empty() {
            return Err(ConfirmError::Invalid(errors));
        }
        self.is_submitting = true;
        Ok(())
    }

    /// Resolve the in-flight submission into the terminal success state.
    pub fn complete_submit(&mut self) {
        if self.is_submitting {
            self.is_submitting = false;
            self.is_confirmed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> BookingWizard {
        let mut w = BookingWizard::new();
        w.update(SectionPatch::GuestInfo(GuestInfoPatch {
            first_name: Some("Ava".into()),
            last_name: Some("Nguyen".into()),
            email: Some("ava@example.com".into()),
            phone: Some("+49 171 5550123".into()),
        }));
        w.update(SectionPatch::BookingDetails(BookingDetailsPatch {
            room_type: Some("double".into()),
            check_in: Some("2025-09-20".into()),
            check_out: Some("2025-09-23".into()),
            adults: Some(2),
            ..Default::default()
        }));
        w
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut w = filled_wizard();
        let before = w.data.clone();
        w.update(SectionPatch::GuestInfo(GuestInfoPatch::default()));
        w.update(SectionPatch::BookingDetails(BookingDetailsPatch::default()));
        w.update(SectionPatch::Preferences(PreferencesPatch::default()));
        assert_eq!(w.data, before);
    }

    #[test]
    fn applying_the_same_patch_twice_is_idempotent() {
        let mut w = BookingWizard::new();
        let patch = SectionPatch::Preferences(PreferencesPatch {
            bed_type: Some("king".into()),
            ..Default::default()
        });
        w.update(patch.clone());
        let once = w.data.clone();
        w.update(patch);
        assert_eq!(w.data, once);
    }

    #[test]
    fn envelope_links_guest_to_booking() {
        let mut w = filled_wizard();
        w.update(SectionPatch::BookingDetails(BookingDetailsPatch {
            room_type: Some("Double".into()),
            ..Default::default()
        }));
        w.update(SectionPatch::Preferences(PreferencesPatch {
            meal_plan: Some("Half board".into()),
            ..Default::default()
        }));
        let env = w.data.to_envelope();
        assert_eq!(env.guest.name, "Ava Nguyen");
        assert_eq!(env.guest.email, "ava@example.com");
        assert_eq!(env.booking.guest_id, env.guest.id);
        assert_eq!(env.booking.room_type, RoomType::Double);
        assert_eq!(env.booking.package, BookingPackage::HalfBoard);
        assert_eq!(env.booking.status, BookingStatus::Confirmed);
        assert_eq!(env.booking.nights(), 3);
    }

    #[test]
    fn unselected_meal_plan_maps_to_room_only() {
        assert_eq!(package_from_meal_plan(""), BookingPackage::RoomOnly);
        assert_eq!(
            package_from_meal_plan(SENTINEL_SELECT_OPTION),
            BookingPackage::RoomOnly
        );
    }

    #[test]
    fn patch_touches_only_its_section() {
        let mut w = filled_wizard();
        w.update(SectionPatch::Preferences(PreferencesPatch {
            meal_plan: Some("half-board".into()),
            ..Default::default()
        }));
        assert_eq!(w.data.guest_info.first_name, "Ava");
        assert_eq!(w.data.booking_details.check_in, "2025-09-20");
        assert_eq!(w.data.preferences.meal_plan, "half-board");
    }

    #[test]
    fn steps_advance_linearly_and_saturate() {
        let mut w = BookingWizard::new();
        assert_eq!(w.step(), 1);
        w.prev_step();
        assert_eq!(w.step(), 1);
        w.next_step();
        w.next_step();
        w.next_step();
        assert_eq!(w.step(), 4);
        w.next_step();
        assert_eq!(w.step(), 4);
        w.prev_step();
        assert_eq!(w.step(), 3);
    }

    #[test]
    fn invalid_email_blocks_confirmation() {
        let mut w = filled_wizard();
        w.next_step();
        w.next_step();
        w.next_step();
        w.update(SectionPatch::GuestInfo(GuestInfoPatch {
            email: Some(String::new()),
            ..Default::default()
        }));
        let err = w.begin_submit(true).unwrap_err();
        match err {
            ConfirmError::Invalid(errors) => {
                assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(w.step(), 4);
        assert!(!w.is_confirmed());
    }

    #[test]
    fn sentinel_values_count_as_missing() {
        let mut w = filled_wizard();
        w.update(SectionPatch::BookingDetails(BookingDetailsPatch {
            room_type: Some(SENTINEL_SELECT_OPTION.into()),
            ..Default::default()
        }));
        let errors = validate_booking(&w.data, true);
        assert!(errors.iter().any(|e| e.field == "roomType"));
    }

    #[test]
    fn unchecked_terms_block_confirmation() {
        let mut w = filled_wizard();
        let errors = validate_booking(&w.data, false);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "terms");
    }

    #[test]
    fn second_confirm_click_is_dropped_while_in_flight() {
        let mut w = filled_wizard();
        assert!(w.begin_submit(true).is_ok());
        assert_eq!(w.begin_submit(true), Err(ConfirmError::AlreadySubmitting));
        w.complete_submit();
        assert!(w.is_confirmed());
        // and again after confirmation
        assert_eq!(w.begin_submit(true), Err(ConfirmError::AlreadySubmitting));
    }

    #[test]
    fn confirmed_wizard_ignores_step_transitions() {
        let mut w = filled_wizard();
        w.begin_submit(true).unwrap();
        w.complete_submit();
        let step = w.step();
        w.next_step();
        w.prev_step();
        assert_eq!(w.step(), step);
        assert!(w.is_confirmed());
    }

    #[test]
    fn duration_handles_missing_and_reversed_dates() {
        assert_eq!(duration_nights("2025-09-20", "2025-09-23"), 3);
        assert_eq!(duration_nights("", "2025-09-23"), 0);
        assert_eq!(duration_nights("2025-09-23", "2025-09-20"), 0);
        assert_eq!(duration_nights("not a date", "2025-09-23"), 0);
    }

    #[test]
    fn email_shape_check() {
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("first.last@mail.example.org"));
        assert!(!email_is_valid("a@b"));
        assert!(!email_is_valid("@b.co"));
        assert!(!email_is_valid("a@.co"));
        assert!(!email_is_valid("a@b."));
        assert!(!email_is_valid("a b@c.de"));
        assert!(!email_is_valid("a@b@c.de"));
    }

    #[test]
    fn pluralization() {
        assert_eq!(pluralize(1, "adult", "adults"), "1 adult");
        assert_eq!(pluralize(2, "adult", "adults"), "2 adults");
        assert_eq!(pluralize(0, "child", "children"), "0 children");
    }
}
