//! Configuration utilities

pub mod config;

pub use config::{AppConfig, ArConfig, ConfigError, ConfigurationManager, GeolocationOptions, PlacesConfig};
