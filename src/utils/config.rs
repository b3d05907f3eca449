use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Places search service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacesConfig {
    /// Venue search endpoint
    pub endpoint: String,
    /// Optional proxy prefix prepended to the endpoint URL
    pub cors_proxy: Option<String>,
    /// API client identifier
    pub client_id: String,
    /// API client secret
    pub client_secret: String,
    /// API version date string
    pub version: String,
    /// Maximum number of places requested per search
    pub result_limit: u32,
}

/// AR scene thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArConfig {
    /// Search radius for nearby places (meters)
    pub search_radius_m: f64,
    /// Minimum movement before destinations are refreshed (meters)
    pub gps_min_distance_m: f64,
    /// Worst acceptable position accuracy (meters)
    pub position_min_accuracy_m: f64,
}

/// Options handed to the position source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationOptions {
    /// Ask the device for its most accurate fix
    pub enable_high_accuracy: bool,
    /// Maximum age of a cached fix (milliseconds, 0 = never reuse)
    pub maximum_age_ms: u32,
    /// How long to wait for a fix (milliseconds)
    pub timeout_ms: u32,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub places: PlacesConfig,
    pub ar: ArConfig,
    pub geolocation: GeolocationOptions,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.foursquare.com/v2/venues/search".to_string(),
            cors_proxy: None,
            client_id: String::new(),
            client_secret: String::new(),
            version: "20300101".to_string(),
            result_limit: 10,
        }
    }
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            search_radius_m: 300.0,
            gps_min_distance_m: 5.0,
            position_min_accuracy_m: 100.0,
        }
    }
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            maximum_age_ms: 0,
            timeout_ms: 27000,
        }
    }
}

impl PlacesConfig {
    /// Whether API credentials have been filled in
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    #[error("Configuration I/O error: {message}")]
    IoError { message: String },
    #[error("Configuration serialization error: {message}")]
    SerializationError { message: String },
}

impl ConfigError {
    fn invalid(parameter: &str, value: impl ToString, reason: &str) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Loads, validates, edits and saves the application configuration
#[derive(Debug, Default)]
pub struct ConfigurationManager {
    config: AppConfig,
    /// Configuration file path
    config_file_path: Option<String>,
    /// Whether configuration has been modified
    is_modified: bool,
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Replace the whole configuration after validation
    pub fn update_config(&mut self, config: AppConfig) -> Result<(), ConfigError> {
        Self::validate(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        // Validate before applying
        Self::validate(&config)?;

        info!("Loaded configuration from {}", path_str);
        self.config = config;
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(&self.config).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })?;

        debug!("Saved configuration to {}", path_str);
        self.config_file_path = Some(path_str);
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = self.config_file_path.clone() {
            self.save_to_file(path)
        } else {
            Err(ConfigError::IoError {
                message: "No file path set for saving configuration".to_string(),
            })
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    // Runtime parameter adjustment

    /// Update the places search radius, returning the previous value
    pub fn set_search_radius(&mut self, radius_m: f64) -> Result<f64, ConfigError> {
        Self::check_search_radius(radius_m)?;
        let old_value = self.config.ar.search_radius_m;
        self.config.ar.search_radius_m = radius_m;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update the places result limit, returning the previous value
    pub fn set_result_limit(&mut self, limit: u32) -> Result<u32, ConfigError> {
        Self::check_result_limit(limit)?;
        let old_value = self.config.places.result_limit;
        self.config.places.result_limit = limit;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Update the geolocation timeout, returning the previous value
    pub fn set_position_timeout(&mut self, timeout_ms: u32) -> Result<u32, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "geolocation.timeout_ms",
                timeout_ms,
                "Position timeout must be positive",
            ));
        }
        let old_value = self.config.geolocation.timeout_ms;
        self.config.geolocation.timeout_ms = timeout_ms;
        self.is_modified = true;
        Ok(old_value)
    }

    /// Set API credentials
    pub fn set_credentials(&mut self, client_id: &str, client_secret: &str) {
        self.config.places.client_id = client_id.to_string();
        self.config.places.client_secret = client_secret.to_string();
        self.is_modified = true;
    }

    /// Validate a complete configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        Self::check_search_radius(config.ar.search_radius_m)?;
        Self::check_result_limit(config.places.result_limit)?;

        if !(config.ar.gps_min_distance_m >= 0.0) {
            return Err(ConfigError::invalid(
                "ar.gps_min_distance_m",
                config.ar.gps_min_distance_m,
                "Minimum GPS distance cannot be negative",
            ));
        }

        if !(config.ar.position_min_accuracy_m > 0.0) {
            return Err(ConfigError::invalid(
                "ar.position_min_accuracy_m",
                config.ar.position_min_accuracy_m,
                "Accuracy threshold must be positive",
            ));
        }

        if config.geolocation.timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "geolocation.timeout_ms",
                config.geolocation.timeout_ms,
                "Position timeout must be positive",
            ));
        }

        if config.places.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid(
                "places.endpoint",
                "",
                "Places endpoint cannot be empty",
            ));
        }

        Ok(())
    }

    fn check_search_radius(radius_m: f64) -> Result<(), ConfigError> {
        if !(radius_m > 0.0 && radius_m <= 100_000.0) {
            return Err(ConfigError::invalid(
                "ar.search_radius_m",
                radius_m,
                "Search radius must be within (0, 100000] meters",
            ));
        }
        Ok(())
    }

    fn check_result_limit(limit: u32) -> Result<(), ConfigError> {
        if !(1..=50).contains(&limit) {
            return Err(ConfigError::invalid(
                "places.result_limit",
                limit,
                "Result limit must be between 1 and 50",
            ));
        }
        Ok(())
    }
}
