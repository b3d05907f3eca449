//! GPS-anchored navigation core
//!
//! Great-circle distance and destination derivation for location-based AR
//! overlays, with the configuration, parsing and session plumbing needed to
//! feed them from a position source and a places search.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    Destination, DestinationOrigin, DestinationSet, ExternalPlace, GeoCoordinate, PositionFix,
    EARTH_MEAN_RADIUS_M, MAX_DESTINATIONS,
};
pub use crate::algorithms::{derive_destinations, distance, initial_bearing, FallbackPoint, LocalFrame};
pub use crate::processing::{ParseError, PlacesParser};
pub use crate::validation::{CoordinateValidator, ValidationError};
pub use crate::utils::{AppConfig, ConfigError, ConfigurationManager};
pub use crate::api::{
    MarkerFormatter, NavigationMarker, NavigationSession, OutputFormat, PlaceSource, PlacesQuery,
    PositionSource, SessionError, SourceError,
};
