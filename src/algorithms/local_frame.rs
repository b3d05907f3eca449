//! Local tangent plane around a reference coordinate
//!
//! AR scenes place GPS-anchored content in metres relative to the camera.
//! This frame maps coordinates to east/north offsets using the WGS84 radii of
//! curvature at the reference latitude, which is accurate to well under a
//! metre over the few hundred metres a navigation scene spans.

use crate::core::GeoCoordinate;
use nalgebra::Vector2;

/// Earth semi-major axis in meters (WGS84)
pub const EARTH_RADIUS_WGS84: f64 = 6378137.0;

/// Earth flattening factor (WGS84)
pub const EARTH_FLATTENING_WGS84: f64 = 1.0 / 298.257223563;

/// Eccentricity squared (WGS84)
pub const ECCENTRICITY_SQUARED_WGS84: f64 =
    2.0 * EARTH_FLATTENING_WGS84 - EARTH_FLATTENING_WGS84 * EARTH_FLATTENING_WGS84;

/// East-North frame anchored at a reference coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    reference: GeoCoordinate,
    /// Prime vertical radius of curvature times cos(latitude)
    east_radius: f64,
    /// Meridional radius of curvature
    north_radius: f64,
}

impl LocalFrame {
    pub fn new(reference: GeoCoordinate) -> Self {
        let lat_rad = reference.latitude.to_radians();
        let w = 1.0 - ECCENTRICITY_SQUARED_WGS84 * lat_rad.sin().powi(2);

        let n = EARTH_RADIUS_WGS84 / w.sqrt();
        let m = EARTH_RADIUS_WGS84 * (1.0 - ECCENTRICITY_SQUARED_WGS84) / w.powf(1.5);

        Self {
            reference,
            east_radius: n * lat_rad.cos(),
            north_radius: m,
        }
    }

    pub fn reference(&self) -> GeoCoordinate {
        self.reference
    }

    /// (east, north) offset of `coordinate` from the reference, in meters
    pub fn to_local(&self, coordinate: GeoCoordinate) -> Vector2<f64> {
        let lat_diff = (coordinate.latitude - self.reference.latitude).to_radians();
        let lon_diff = (coordinate.longitude - self.reference.longitude).to_radians();

        Vector2::new(self.east_radius * lon_diff, self.north_radius * lat_diff)
    }

    /// Inverse of [`to_local`](Self::to_local)
    pub fn to_geodetic(&self, local: Vector2<f64>) -> GeoCoordinate {
        let lat_diff = local.y / self.north_radius;
        let lon_diff = local.x / self.east_radius;

        GeoCoordinate {
            latitude: self.reference.latitude + lat_diff.to_degrees(),
            longitude: self.reference.longitude + lon_diff.to_degrees(),
        }
    }
}
