//! Coordinate validation for data entering the navigation core

use crate::core::{ExternalPlace, GeoCoordinate};
use thiserror::Error;

/// Validation errors for coordinates and place records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid latitude {value}: must be between -90 and 90 degrees")]
    LatitudeOutOfRange { value: f64 },
    #[error("Invalid longitude {value}: must be between -180 and 180 degrees")]
    LongitudeOutOfRange { value: f64 },
    #[error("Place at index {index} has an empty name")]
    EmptyPlaceName { index: usize },
    #[error("Place '{name}' has an invalid coordinate: {source}")]
    InvalidPlace {
        name: String,
        #[source]
        source: Box<ValidationError>,
    },
}

/// Coordinate validation utilities
pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Check the latitude/longitude range invariant. NaN fails both range checks.
    pub fn validate(coordinate: &GeoCoordinate) -> Result<(), ValidationError> {
        if !(-90.0..=90.0).contains(&coordinate.latitude) {
            return Err(ValidationError::LatitudeOutOfRange {
                value: coordinate.latitude,
            });
        }

        if !(-180.0..=180.0).contains(&coordinate.longitude) {
            return Err(ValidationError::LongitudeOutOfRange {
                value: coordinate.longitude,
            });
        }

        Ok(())
    }

    pub fn is_valid(coordinate: &GeoCoordinate) -> bool {
        Self::validate(coordinate).is_ok()
    }

    /// Validate every place in a list; the first failure wins
    pub fn validate_places(places: &[ExternalPlace]) -> Result<(), ValidationError> {
        for (index, place) in places.iter().enumerate() {
            if place.name.trim().is_empty() {
                return Err(ValidationError::EmptyPlaceName { index });
            }

            Self::validate(&place.coordinate).map_err(|e| ValidationError::InvalidPlace {
                name: place.name.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}
