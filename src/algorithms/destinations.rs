//! Destination derivation for a navigation session
//!
//! Turns an optional list of nearby places into a bounded, ordered set of
//! navigation targets. When no places are available the set is synthesized
//! from fixed angular offsets around the reference point.
//!
//! The offsets are plain degree deltas. A longitude degree shrinks toward the
//! poles, so the East, West and Northeast points drift closer to the user as
//! latitude grows. That is the intended approximate behaviour.

use crate::core::{
    Destination, DestinationOrigin, DestinationSet, ExternalPlace, GeoCoordinate,
    CARDINAL_OFFSET_DEG, DIAGONAL_OFFSET_DEG, MAX_DESTINATIONS, NORTH_MARKER_OFFSET_DEG,
};

/// Synthesized points used when no external places are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPoint {
    North,
    East,
    South,
    West,
    Northeast,
}

impl FallbackPoint {
    /// Fixed emission order of the fallback set
    pub const ORDER: [FallbackPoint; MAX_DESTINATIONS] = [
        FallbackPoint::North,
        FallbackPoint::East,
        FallbackPoint::South,
        FallbackPoint::West,
        FallbackPoint::Northeast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FallbackPoint::North => "North",
            FallbackPoint::East => "East",
            FallbackPoint::South => "South",
            FallbackPoint::West => "West",
            FallbackPoint::Northeast => "Northeast",
        }
    }

    /// (latitude, longitude) delta in degrees
    pub fn delta(self) -> (f64, f64) {
        match self {
            FallbackPoint::North => (CARDINAL_OFFSET_DEG, 0.0),
            FallbackPoint::East => (0.0, CARDINAL_OFFSET_DEG),
            FallbackPoint::South => (-CARDINAL_OFFSET_DEG, 0.0),
            FallbackPoint::West => (0.0, -CARDINAL_OFFSET_DEG),
            FallbackPoint::Northeast => (DIAGONAL_OFFSET_DEG, DIAGONAL_OFFSET_DEG),
        }
    }

    pub fn around(self, reference: GeoCoordinate) -> Destination {
        let (d_lat, d_lon) = self.delta();
        Destination::new(self.label(), reference.offset_by(d_lat, d_lon))
    }
}

/// Derive the destination set for `reference`.
///
/// A present, non-empty `external` list contributes its first
/// [`MAX_DESTINATIONS`] entries in source order, without padding. An absent
/// or empty list yields the five fallback points.
pub fn derive_destinations(
    reference: GeoCoordinate,
    external: Option<&[ExternalPlace]>,
) -> DestinationSet {
    match external {
        Some(places) if !places.is_empty() => DestinationSet::new(
            DestinationOrigin::External,
            places
                .iter()
                .take(MAX_DESTINATIONS)
                .map(Destination::from)
                .collect(),
        ),
        _ => fallback_destinations(reference),
    }
}

/// The five synthesized destinations around `reference`
pub fn fallback_destinations(reference: GeoCoordinate) -> DestinationSet {
    DestinationSet::new(
        DestinationOrigin::Fallback,
        FallbackPoint::ORDER
            .iter()
            .map(|point| point.around(reference))
            .collect(),
    )
}

/// Single marker placed a short distance due north of `reference`
pub fn marker_north_of(reference: GeoCoordinate) -> Destination {
    Destination::new(
        "North Marker",
        reference.offset_by(NORTH_MARKER_OFFSET_DEG, 0.0),
    )
}
