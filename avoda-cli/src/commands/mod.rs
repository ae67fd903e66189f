pub mod add;
pub mod export;
pub mod list;
pub mod program;
pub mod remove;
