//! Common API types: source traits and errors

use crate::api::request::PlacesQuery;
use crate::core::{ExternalPlace, PositionFix};
use crate::processing::ParseError;
use crate::utils::{ConfigError, GeolocationOptions};
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for session operations
pub type ApiResult<T> = Result<T, SessionError>;

/// Failures reported by position or place sources
#[derive(Debug, Error)]
pub enum SourceError {
    /// The user or platform refused access to location
    #[error("Location permission denied")]
    PermissionDenied,
    /// No fix arrived within the allowed time
    #[error("Timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u32 },
    /// The source could not produce data
    #[error("Source unavailable: {reason}")]
    Unavailable { reason: String },
    /// The source produced data that could not be understood
    #[error("Malformed source data: {0}")]
    Malformed(#[from] ParseError),
    #[error("Source I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by a navigation session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unable to get current position: {0}")]
    Position(#[source] SourceError),
    #[error("Position fix rejected: {0}")]
    InvalidFix(#[from] ValidationError),
    #[error("Position accuracy {accuracy_m:.1}m is worse than the required {required_m:.1}m")]
    InaccurateFix { accuracy_m: f64, required_m: f64 },
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),
}

/// Supplies the device's current position
pub trait PositionSource {
    /// Block until a fix is available or the source gives up
    fn current_position(&mut self, options: &GeolocationOptions) -> Result<PositionFix, SourceError>;
}

/// Supplies nearby places for a query
pub trait PlaceSource {
    fn fetch_places(&mut self, query: &PlacesQuery) -> Result<Vec<ExternalPlace>, SourceError>;
}

/// Output format for rendered markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Indented JSON
    JsonPretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
