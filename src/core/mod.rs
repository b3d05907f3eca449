//! Core types and constants for GPS-anchored navigation

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
