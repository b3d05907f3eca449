//! Geodesy and destination algorithms

pub mod haversine;
pub mod destinations;
pub mod local_frame;

pub use haversine::{distance, initial_bearing};
pub use destinations::{derive_destinations, fallback_destinations, marker_north_of, FallbackPoint};
pub use local_frame::LocalFrame;
