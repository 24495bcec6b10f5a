//! Command implementations

pub mod completions;
pub mod draw;
pub mod list;
pub mod show;
