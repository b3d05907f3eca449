//! Physical constants and navigation parameters

/// Earth mean radius used by the Haversine distance (m)
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371_000.0;

/// Upper bound on the size of a destination set
pub const MAX_DESTINATIONS: usize = 5;

/// Fallback offset for the cardinal points, roughly 100 m (degrees)
pub const CARDINAL_OFFSET_DEG: f64 = 0.0009;

/// Fallback offset on each axis for the diagonal point, roughly 150 m (degrees)
pub const DIAGONAL_OFFSET_DEG: f64 = 0.00135;

/// Latitude offset of the single demo marker, roughly 111 m north (degrees)
pub const NORTH_MARKER_OFFSET_DEG: f64 = 0.001;
