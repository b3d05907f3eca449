//! Processing of external place data

pub mod parser;

pub use parser::{ParseError, PlacesParser};
