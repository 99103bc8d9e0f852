//! Command implementations for the CLI

pub mod list;
pub mod show;
