//! Marker output for the host renderer
//!
//! A marker carries everything a scene needs to draw one navigation arrow:
//! where it is, how far away and in which direction, and the text and colour
//! to show. Drawing it is left to the host.

use crate::algorithms::{distance, initial_bearing, LocalFrame};
use crate::api::types::OutputFormat;
use crate::core::{Destination, GeoCoordinate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrow colours, cycled by marker index
pub const MARKER_PALETTE: [&str; 6] = ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF"];

/// Presentation-neutral description of one navigation target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationMarker {
    pub index: usize,
    pub destination: Destination,
    /// Great-circle distance from the user (m)
    pub distance_m: f64,
    /// Initial bearing from the user, degrees from north
    pub bearing_deg: f64,
    /// Offset east of the user (m)
    pub east_m: f64,
    /// Offset north of the user (m)
    pub north_m: f64,
    pub color: String,
    /// Name and rounded distance on two lines
    pub label: String,
}

impl NavigationMarker {
    /// Text shown when the marker is selected
    pub fn detail_text(&self) -> String {
        format!(
            "{}\nDistance: {} meters\nLat: {:.6}\nLon: {:.6}",
            self.destination.name,
            self.distance_m.round() as i64,
            self.destination.coordinate.latitude,
            self.destination.coordinate.longitude,
        )
    }
}

impl fmt::Display for NavigationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}m @ {:.0}° (E {:.1} m, N {:.1} m) lat={:.6}, lon={:.6} {}",
            self.index,
            self.destination.name,
            self.distance_m.round() as i64,
            self.bearing_deg,
            self.east_m,
            self.north_m,
            self.destination.coordinate.latitude,
            self.destination.coordinate.longitude,
            self.color,
        )
    }
}

/// Builds and renders markers relative to the user's position
#[derive(Debug, Clone)]
pub struct MarkerFormatter {
    user: GeoCoordinate,
    frame: LocalFrame,
    output_format: OutputFormat,
}

impl MarkerFormatter {
    pub fn new(user: GeoCoordinate) -> Self {
        Self {
            user,
            frame: LocalFrame::new(user),
            output_format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn marker(&self, index: usize, destination: &Destination) -> NavigationMarker {
        let distance_m = distance(self.user, destination.coordinate);
        let local = self.frame.to_local(destination.coordinate);

        NavigationMarker {
            index,
            destination: destination.clone(),
            distance_m,
            bearing_deg: initial_bearing(self.user, destination.coordinate),
            east_m: local.x,
            north_m: local.y,
            color: MARKER_PALETTE[index % MARKER_PALETTE.len()].to_string(),
            label: format!("{}\n{}m", destination.name, distance_m.round() as i64),
        }
    }

    pub fn markers<'a, I>(&self, destinations: I) -> Vec<NavigationMarker>
    where
        I: IntoIterator<Item = &'a Destination>,
    {
        destinations
            .into_iter()
            .enumerate()
            .map(|(index, destination)| self.marker(index, destination))
            .collect()
    }

    /// Render markers in the configured output format
    pub fn render(&self, markers: &[NavigationMarker]) -> Result<String, serde_json::Error> {
        match self.output_format {
            OutputFormat::Text => Ok(self.format_text(markers)),
            OutputFormat::Json => serde_json::to_string(markers),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(markers),
        }
    }

    fn format_text(&self, markers: &[NavigationMarker]) -> String {
        let mut output = format!(
            "User position: lat={:.6}, lon={:.6}\n",
            self.user.latitude, self.user.longitude
        );
        for marker in markers {
            output.push_str(&marker.to_string());
            output.push('\n');
        }
        output
    }
}
