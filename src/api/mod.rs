//! Orchestration API around the navigation core
//!
//! Sources supply the position and nearby places, the session turns them
//! into destinations, and the formatter describes markers for a renderer.

pub mod blocking;
pub mod formatting;
pub mod mock;
pub mod request;
pub mod types;

// Re-export commonly used API types
pub use types::{ApiResult, OutputFormat, PlaceSource, PositionSource, SessionError, SourceError};
pub use blocking::{NavigationPass, NavigationSession};
pub use formatting::{MarkerFormatter, NavigationMarker, MARKER_PALETTE};
pub use mock::{JsonFilePlaceSource, StaticPlaceSource, StaticPositionSource, UnavailablePlaceSource};
pub use request::PlacesQuery;
