//! Data validation at the edges of the navigation core

pub mod data;

pub use data::{CoordinateValidator, ValidationError};
