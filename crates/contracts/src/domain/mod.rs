pub mod bill;
pub mod booking;
pub mod guest;
pub mod inventory;
pub mod menu;
pub mod room;

pub use bill::{Bill, BillItem, BillStatus};
pub use booking::{Booking, BookingEnvelope, BookingPackage, BookingStatus};
pub use guest::Guest;
pub use inventory::{InventoryCategory, InventoryItem, StockStatus};
pub use menu::{MenuCategory, MenuItem};
pub use room::{Room, RoomStatus, RoomType};
