//! In-process position and place sources for testing and offline use

use crate::api::request::PlacesQuery;
use crate::api::types::{PlaceSource, PositionSource, SourceError};
use crate::core::{ExternalPlace, GeoCoordinate, PositionFix};
use crate::processing::PlacesParser;
use crate::utils::GeolocationOptions;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// Position source that replays a queue of fixes, then repeats the last one
#[derive(Debug, Clone)]
pub struct StaticPositionSource {
    fixes: VecDeque<PositionFix>,
    last: Option<PositionFix>,
    failure: Option<fn() -> SourceError>,
    request_count: u32,
}

impl StaticPositionSource {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self::from_fix(PositionFix::new(coordinate))
    }

    pub fn from_fix(fix: PositionFix) -> Self {
        Self {
            fixes: VecDeque::from([fix]),
            last: None,
            failure: None,
            request_count: 0,
        }
    }

    /// Source that always fails with the error built by `failure`
    pub fn failing(failure: fn() -> SourceError) -> Self {
        Self {
            fixes: VecDeque::new(),
            last: None,
            failure: Some(failure),
            request_count: 0,
        }
    }

    /// Queue another fix to be returned after the current ones
    pub fn push_fix(&mut self, fix: PositionFix) {
        self.fixes.push_back(fix);
    }

    pub fn request_count(&self) -> u32 {
        self.request_count
    }
}

impl PositionSource for StaticPositionSource {
    fn current_position(&mut self, options: &GeolocationOptions) -> Result<PositionFix, SourceError> {
        self.request_count += 1;

        if let Some(failure) = self.failure {
            return Err(failure());
        }

        match self.fixes.pop_front().or(self.last) {
            Some(fix) => {
                self.last = Some(fix);
                Ok(fix)
            }
            None => Err(SourceError::Timeout {
                timeout_ms: options.timeout_ms,
            }),
        }
    }
}

/// Place source returning a fixed list and recording the queries it saw
#[derive(Debug, Clone, Default)]
pub struct StaticPlaceSource {
    places: Vec<ExternalPlace>,
    queries: Vec<PlacesQuery>,
}

impl StaticPlaceSource {
    pub fn new(places: Vec<ExternalPlace>) -> Self {
        Self {
            places,
            queries: Vec::new(),
        }
    }

    pub fn queries(&self) -> &[PlacesQuery] {
        &self.queries
    }
}

impl PlaceSource for StaticPlaceSource {
    fn fetch_places(&mut self, query: &PlacesQuery) -> Result<Vec<ExternalPlace>, SourceError> {
        self.queries.push(query.clone());
        Ok(self
            .places
            .iter()
            .take(query.limit as usize)
            .cloned()
            .collect())
    }
}

/// Place source that is never reachable
#[derive(Debug, Clone, Default)]
pub struct UnavailablePlaceSource {
    reason: String,
}

impl UnavailablePlaceSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PlaceSource for UnavailablePlaceSource {
    fn fetch_places(&mut self, _query: &PlacesQuery) -> Result<Vec<ExternalPlace>, SourceError> {
        Err(SourceError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}

/// Place source backed by a saved venue search response on disk
#[derive(Debug, Clone)]
pub struct JsonFilePlaceSource {
    path: PathBuf,
    parser: PlacesParser,
}

impl JsonFilePlaceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            parser: PlacesParser::new(),
        }
    }
}

impl PlaceSource for JsonFilePlaceSource {
    fn fetch_places(&mut self, query: &PlacesQuery) -> Result<Vec<ExternalPlace>, SourceError> {
        let body = fs::read_to_string(&self.path)?;
        let mut places = self.parser.parse(&body)?;
        places.truncate(query.limit as usize);
        Ok(places)
    }
}
