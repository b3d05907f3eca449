//! Venue search response parsing
//!
//! Reduces a Foursquare-style venue search response to the
//! [`ExternalPlace`] shape the destination deriver consumes. Anything beyond
//! the name and location of each venue is ignored.

use crate::core::{ExternalPlace, GeoCoordinate};
use crate::validation::{CoordinateValidator, ValidationError};
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while parsing a places response
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("Response does not contain a venue list")]
    MissingVenues,
    #[error("Venue {index} rejected: {source}")]
    InvalidVenue {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Deserialize)]
struct VenueLocation {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct Venue {
    name: String,
    location: VenueLocation,
}

#[derive(Debug, Deserialize)]
struct VenueList {
    venues: Option<Vec<Venue>>,
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: Option<VenueList>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlacesDocument {
    Bare(Vec<Venue>),
    Envelope(SearchEnvelope),
}

/// Parser for venue search responses
#[derive(Debug, Clone)]
pub struct PlacesParser {
    strict_validation: bool,
}

impl Default for PlacesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacesParser {
    /// Create a parser that rejects venues with out-of-range coordinates
    pub fn new() -> Self {
        Self {
            strict_validation: true,
        }
    }

    /// Enable or disable coordinate range checks
    pub fn set_strict_validation(&mut self, strict: bool) {
        self.strict_validation = strict;
    }

    /// Parse a response body, preserving venue order
    pub fn parse(&self, body: &str) -> Result<Vec<ExternalPlace>, ParseError> {
        let venues = match serde_json::from_str::<PlacesDocument>(body)? {
            PlacesDocument::Bare(venues) => venues,
            PlacesDocument::Envelope(envelope) => envelope
                .response
                .and_then(|list| list.venues)
                .ok_or(ParseError::MissingVenues)?,
        };

        let mut places = Vec::with_capacity(venues.len());
        for (index, venue) in venues.into_iter().enumerate() {
            let coordinate = GeoCoordinate::new(venue.location.lat, venue.location.lng);
            if self.strict_validation {
                CoordinateValidator::validate(&coordinate)
                    .map_err(|source| ParseError::InvalidVenue { index, source })?;
            }
            places.push(ExternalPlace::new(venue.name, coordinate));
        }

        debug!("Parsed {} places from response", places.len());
        Ok(places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_RESPONSE: &str = r#"
    {
      "meta": { "code": 200 },
      "response": {
        "venues": [
          {
            "id": "4b0588",
            "name": "Blue Bottle Coffee",
            "location": { "lat": 37.7825, "lng": -122.4078, "distance": 120 }
          },
          {
            "id": "4c1234",
            "name": "City Lights Books",
            "location": { "lat": 37.7976, "lng": -122.4065 }
          }
        ]
      }
    }"#;

    #[test]
    fn test_parse_search_response() {
        let places = PlacesParser::new().parse(SEARCH_RESPONSE).unwrap();

        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Blue Bottle Coffee");
        assert_eq!(places[0].coordinate, GeoCoordinate::new(37.7825, -122.4078));
        assert_eq!(places[1].name, "City Lights Books");
    }

    #[test]
    fn test_parse_bare_venue_array() {
        let body = r#"[{ "name": "Pier 39", "location": { "lat": 37.8087, "lng": -122.4098 } }]"#;
        let places = PlacesParser::new().parse(body).unwrap();
        assert_eq!(places, vec![ExternalPlace::new("Pier 39", GeoCoordinate::new(37.8087, -122.4098))]);
    }

    #[test]
    fn test_empty_venue_list_is_valid() {
        let body = r#"{ "response": { "venues": [] } }"#;
        assert!(PlacesParser::new().parse(body).unwrap().is_empty());
    }

    #[test]
    fn test_missing_venues() {
        let body = r#"{ "meta": { "code": 400 }, "response": {} }"#;
        assert!(matches!(PlacesParser::new().parse(body), Err(ParseError::MissingVenues)));

        let body = r#"{ "meta": { "code": 500 } }"#;
        assert!(matches!(PlacesParser::new().parse(body), Err(ParseError::MissingVenues)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PlacesParser::new().parse("{ not json"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_out_of_range_venue() {
        let body = r#"[
            { "name": "Ok", "location": { "lat": 1.0, "lng": 1.0 } },
            { "name": "Bad", "location": { "lat": 123.0, "lng": 1.0 } }
        ]"#;

        let result = PlacesParser::new().parse(body);
        assert!(matches!(result, Err(ParseError::InvalidVenue { index: 1, .. })));

        let mut lenient = PlacesParser::new();
        lenient.set_strict_validation(false);
        assert_eq!(lenient.parse(body).unwrap().len(), 2);
    }
}
