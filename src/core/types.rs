//! Core data types for navigation targets

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Same point shifted by a fixed number of degrees on each axis
    pub fn offset_by(&self, d_lat: f64, d_lon: f64) -> Self {
        Self {
            latitude: self.latitude + d_lat,
            longitude: self.longitude + d_lon,
        }
    }
}

/// Named navigation target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

impl Destination {
    pub fn new(name: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

/// Place record supplied by an external search, reduced to what the deriver needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalPlace {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

impl ExternalPlace {
    pub fn new(name: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

impl From<&ExternalPlace> for Destination {
    fn from(place: &ExternalPlace) -> Self {
        Destination {
            name: place.name.clone(),
            coordinate: place.coordinate,
        }
    }
}

/// Where the entries of a destination set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestinationOrigin {
    /// Copied from an external place list
    External,
    /// Synthesized around the reference point
    Fallback,
}

/// Ordered set of at most [`MAX_DESTINATIONS`](crate::core::MAX_DESTINATIONS) destinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDestinationSet")]
pub struct DestinationSet {
    origin: DestinationOrigin,
    destinations: Vec<Destination>,
}

impl DestinationSet {
    /// Only the deriver builds sets, which keeps the size bound.
    pub(crate) fn new(origin: DestinationOrigin, destinations: Vec<Destination>) -> Self {
        debug_assert!(destinations.len() <= crate::core::MAX_DESTINATIONS);
        Self { origin, destinations }
    }

    pub fn origin(&self) -> DestinationOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DestinationOrigin::Fallback
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }
}

/// Unchecked wire form of a [`DestinationSet`]
#[derive(Deserialize)]
struct RawDestinationSet {
    origin: DestinationOrigin,
    destinations: Vec<Destination>,
}

impl TryFrom<RawDestinationSet> for DestinationSet {
    type Error = String;

    fn try_from(raw: RawDestinationSet) -> Result<Self, Self::Error> {
        let count = raw.destinations.len();
        match raw.origin {
            DestinationOrigin::External if count > crate::core::MAX_DESTINATIONS => Err(format!(
                "destination set holds {} entries, at most {} allowed",
                count,
                crate::core::MAX_DESTINATIONS
            )),
            DestinationOrigin::Fallback if count != crate::core::MAX_DESTINATIONS => Err(format!(
                "fallback set holds {} entries, exactly {} required",
                count,
                crate::core::MAX_DESTINATIONS
            )),
            origin => Ok(DestinationSet::new(origin, raw.destinations)),
        }
    }
}

impl<'a> IntoIterator for &'a DestinationSet {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

impl IntoIterator for DestinationSet {
    type Item = Destination;
    type IntoIter = std::vec::IntoIter<Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.into_iter()
    }
}

/// Position reported by a position source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub coordinate: GeoCoordinate,
    /// Horizontal accuracy radius reported by the device (m)
    pub accuracy_m: Option<f64>,
}

impl PositionFix {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self {
            coordinate,
            accuracy_m: None,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }
}
