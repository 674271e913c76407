pub mod billing;
pub mod bookings;
pub mod inventory;
pub mod menu;
pub mod rooms;
