//! Blocking navigation session
//!
//! Ties a position source and a place source to the destination deriver.
//! Every call is a plain request/response: ask for a fix, ask for places,
//! derive destinations, describe markers.

use crate::algorithms::{derive_destinations, distance};
use crate::api::formatting::{MarkerFormatter, NavigationMarker};
use crate::api::request::PlacesQuery;
use crate::api::types::{ApiResult, PlaceSource, PositionSource, SessionError};
use crate::core::{DestinationSet, ExternalPlace, GeoCoordinate, PositionFix};
use crate::utils::{AppConfig, ConfigurationManager};
use crate::validation::CoordinateValidator;
use log::{debug, info, warn};

/// Result of one navigation pass
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPass {
    pub fix: PositionFix,
    pub destinations: DestinationSet,
    pub markers: Vec<NavigationMarker>,
}

/// Navigation session over boxed sources
pub struct NavigationSession {
    config: AppConfig,
    position_source: Box<dyn PositionSource>,
    place_source: Box<dyn PlaceSource>,
}

impl NavigationSession {
    /// Create a session after validating `config`
    pub fn new(
        config: AppConfig,
        position_source: Box<dyn PositionSource>,
        place_source: Box<dyn PlaceSource>,
    ) -> ApiResult<Self> {
        ConfigurationManager::validate(&config)?;
        Ok(Self {
            config,
            position_source,
            place_source,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Obtain and check the current position
    pub fn locate(&mut self) -> ApiResult<PositionFix> {
        let fix = self
            .position_source
            .current_position(&self.config.geolocation)
            .map_err(SessionError::Position)?;

        CoordinateValidator::validate(&fix.coordinate)?;

        if let Some(accuracy_m) = fix.accuracy_m {
            let required_m = self.config.ar.position_min_accuracy_m;
            if accuracy_m > required_m {
                return Err(SessionError::InaccurateFix {
                    accuracy_m,
                    required_m,
                });
            }
        }

        info!(
            "GPS position acquired: lat={:.6}, lon={:.6}",
            fix.coordinate.latitude, fix.coordinate.longitude
        );
        Ok(fix)
    }

    /// Query parameters for a search around `position`
    pub fn query_for(&self, position: GeoCoordinate) -> PlacesQuery {
        PlacesQuery::from_config(position, &self.config.places, &self.config.ar)
    }

    /// Run `query` against the place source. Failures are logged and reported as absent.
    ///
    /// The list is all-or-nothing: one invalid entry anywhere discards every
    /// entry, valid leading ones included.
    fn fetch_places(&mut self, query: &PlacesQuery) -> Option<Vec<ExternalPlace>> {
        debug!("Requesting places: {}", query.to_redacted_url());
        match self.place_source.fetch_places(query) {
            Ok(places) => match CoordinateValidator::validate_places(&places) {
                Ok(()) => Some(places),
                Err(e) => {
                    warn!("Discarding place list: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Error fetching places: {}", e);
                None
            }
        }
    }

    /// Destinations around `position`, falling back to synthesized points
    pub fn destinations_for(&mut self, position: GeoCoordinate) -> DestinationSet {
        let query = self.query_for(position);
        let places = self.fetch_places(&query);

        let destinations = derive_destinations(position, places.as_deref());
        if destinations.is_fallback() {
            info!("Using static destinations");
        } else {
            info!("Loaded {} places from source", destinations.len());
        }
        destinations
    }

    /// Every place the source returns around `position`, uncapped. Empty on failure.
    pub fn nearby_places(&mut self, position: GeoCoordinate) -> Vec<ExternalPlace> {
        let query = self.query_for(position);
        let places = self.fetch_places(&query).unwrap_or_default();
        if places.is_empty() {
            warn!("No places found nearby");
        }
        places
    }

    /// Locate, derive destinations and build their markers
    pub fn navigate(&mut self) -> ApiResult<NavigationPass> {
        let fix = self.locate()?;
        let destinations = self.destinations_for(fix.coordinate);
        let markers = MarkerFormatter::new(fix.coordinate).markers(destinations.as_slice());

        info!("Created {} navigation markers", markers.len());
        Ok(NavigationPass {
            fix,
            destinations,
            markers,
        })
    }

    /// Whether the user moved far enough from `previous` to warrant a new pass
    pub fn should_refresh(&self, previous: GeoCoordinate, current: GeoCoordinate) -> bool {
        distance(previous, current) >= self.config.ar.gps_min_distance_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{StaticPlaceSource, StaticPositionSource, UnavailablePlaceSource};
    use crate::api::types::SourceError;

    const USER: GeoCoordinate = GeoCoordinate::new(37.7749, -122.4194);

    fn places(count: usize) -> Vec<ExternalPlace> {
        (0..count)
            .map(|i| ExternalPlace::new(format!("Venue {}", i), USER.offset_by(0.001 * (i + 1) as f64, 0.0)))
            .collect()
    }

    fn session(position: StaticPositionSource, places: impl PlaceSource + 'static) -> NavigationSession {
        NavigationSession::new(AppConfig::default(), Box::new(position), Box::new(places)).unwrap()
    }

    #[test]
    fn test_navigate_with_places() {
        let mut session = session(StaticPositionSource::new(USER), StaticPlaceSource::new(places(8)));
        let pass = session.navigate().unwrap();

        assert_eq!(pass.fix.coordinate, USER);
        assert_eq!(pass.destinations.len(), 5);
        assert!(!pass.destinations.is_fallback());
        assert_eq!(pass.markers.len(), 5);
        assert_eq!(pass.markers[0].destination.name, "Venue 0");
        assert!(pass.markers[0].distance_m < pass.markers[4].distance_m);
    }

    #[test]
    fn test_navigate_falls_back_when_source_fails() {
        let mut session = session(StaticPositionSource::new(USER), UnavailablePlaceSource::new("offline"));
        let pass = session.navigate().unwrap();

        assert!(pass.destinations.is_fallback());
        assert_eq!(pass.markers.len(), 5);
        assert_eq!(pass.markers[0].destination.name, "North");
    }

    #[test]
    fn test_navigate_falls_back_on_empty_list() {
        let mut session = session(StaticPositionSource::new(USER), StaticPlaceSource::new(Vec::new()));
        assert!(session.navigate().unwrap().destinations.is_fallback());
    }

    #[test]
    fn test_invalid_place_list_is_treated_as_absent() {
        let mut list = places(2);
        list.push(ExternalPlace::new("Broken", GeoCoordinate::new(95.0, 0.0)));
        let mut session = session(StaticPositionSource::new(USER), StaticPlaceSource::new(list));

        assert!(session.destinations_for(USER).is_fallback());
        assert!(session.nearby_places(USER).is_empty());
    }

    #[test]
    fn test_position_failure_is_an_error() {
        let mut session = session(
            StaticPositionSource::failing(|| SourceError::PermissionDenied),
            StaticPlaceSource::new(places(3)),
        );
        assert!(matches!(
            session.navigate(),
            Err(SessionError::Position(SourceError::PermissionDenied))
        ));
    }

    #[test]
    fn test_inaccurate_fix_rejected() {
        let fix = PositionFix::new(USER).with_accuracy(250.0);
        let mut session = session(StaticPositionSource::from_fix(fix), StaticPlaceSource::new(places(1)));
        assert!(matches!(session.locate(), Err(SessionError::InaccurateFix { .. })));
    }

    #[test]
    fn test_out_of_range_fix_rejected() {
        let mut session = session(
            StaticPositionSource::new(GeoCoordinate::new(0.0, 200.0)),
            StaticPlaceSource::new(places(1)),
        );
        assert!(matches!(session.locate(), Err(SessionError::InvalidFix(_))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.places.result_limit = 0;
        let result = NavigationSession::new(
            config,
            Box::new(StaticPositionSource::new(USER)),
            Box::new(StaticPlaceSource::default()),
        );
        assert!(matches!(result, Err(SessionError::Configuration(_))));
    }

    #[test]
    fn test_nearby_places_is_uncapped() {
        let mut config = AppConfig::default();
        config.places.result_limit = 30;
        let mut session = NavigationSession::new(
            config,
            Box::new(StaticPositionSource::new(USER)),
            Box::new(StaticPlaceSource::new(places(12))),
        )
        .unwrap();

        assert_eq!(session.nearby_places(USER).len(), 12);
    }

    #[test]
    fn test_should_refresh() {
        let session = session(StaticPositionSource::new(USER), StaticPlaceSource::default());

        assert!(!session.should_refresh(USER, USER));
        // About 1 m north
        assert!(!session.should_refresh(USER, USER.offset_by(0.00001, 0.0)));
        // About 11 m north
        assert!(session.should_refresh(USER, USER.offset_by(0.0001, 0.0)));
    }

    #[test]
    fn test_zero_refresh_threshold_always_refreshes() {
        let mut config = AppConfig::default();
        config.ar.gps_min_distance_m = 0.0;
        let session = NavigationSession::new(
            config,
            Box::new(StaticPositionSource::new(USER)),
            Box::new(StaticPlaceSource::default()),
        )
        .unwrap();

        assert!(session.should_refresh(USER, USER));
    }
}
