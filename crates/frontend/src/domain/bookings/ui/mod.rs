pub mod list;
pub mod wizard;
