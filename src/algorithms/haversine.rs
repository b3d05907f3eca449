//! Great-circle distance and bearing on a spherical Earth
//!
//! Both functions are total over finite inputs. Out-of-range coordinates are
//! not rejected here; they simply produce meaningless (possibly NaN) results.

use crate::core::{GeoCoordinate, EARTH_MEAN_RADIUS_M};

/// Haversine distance between two coordinates in meters
pub fn distance(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    // Rounding can push h past 1 for near-antipodal points; clamp keeps NaN
    let h = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_MEAN_RADIUS_M * c
}

/// Initial bearing from `from` toward `to`, degrees clockwise from true north in [0, 360)
pub fn initial_bearing(from: GeoCoordinate, to: GeoCoordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let d_lambda = (to.longitude - from.longitude).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    // atan2(0, 0) is 0, so coincident points face north
    let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}
