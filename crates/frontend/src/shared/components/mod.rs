pub mod filter_panel;
pub mod modal;
pub mod search_input;
pub mod stat_card;
