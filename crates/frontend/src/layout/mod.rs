pub mod navigation;
pub mod shell;

pub use shell::Shell;
