//! Venue search request description
//!
//! Only the request is described here. Sending it is up to the
//! [`PlaceSource`](crate::api::PlaceSource) implementation.

use crate::core::GeoCoordinate;
use crate::utils::{ArConfig, PlacesConfig};
use serde::{Deserialize, Serialize};

/// Parameters of a nearby-places search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacesQuery {
    pub position: GeoCoordinate,
    pub radius_m: f64,
    pub limit: u32,
    pub endpoint: String,
    pub cors_proxy: Option<String>,
    pub client_id: String,
    pub client_secret: String,
    pub version: String,
}

impl PlacesQuery {
    pub fn from_config(position: GeoCoordinate, places: &PlacesConfig, ar: &ArConfig) -> Self {
        Self {
            position,
            radius_m: ar.search_radius_m,
            limit: places.result_limit,
            endpoint: places.endpoint.clone(),
            cors_proxy: places.cors_proxy.clone(),
            client_id: places.client_id.clone(),
            client_secret: places.client_secret.clone(),
            version: places.version.clone(),
        }
    }

    /// Full request URL, proxy prefix included
    pub fn to_url(&self) -> String {
        format!(
            "{}{}?intent=checkin&ll={},{}&radius={}&client_id={}&client_secret={}&limit={}&v={}",
            self.cors_proxy.as_deref().unwrap_or(""),
            self.endpoint,
            self.position.latitude,
            self.position.longitude,
            self.radius_m,
            self.client_id,
            self.client_secret,
            self.limit,
            self.version,
        )
    }

    /// Same as [`to_url`](Self::to_url) with the secret masked, for logs
    pub fn to_redacted_url(&self) -> String {
        let mut redacted = self.clone();
        if !redacted.client_secret.is_empty() {
            redacted.client_secret = "***".to_string();
        }
        redacted.to_url()
    }
}
