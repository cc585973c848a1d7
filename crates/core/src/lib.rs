//! Core types and configuration for activity-log
//!
//! This crate contains domain types shared across all other crates.

mod activity;
mod config;
mod constants;
mod env_config;

pub use activity::*;
pub use config::*;
pub use constants::*;
pub use env_config::*;
