//! Resolved place model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A place resolved from a free-text name.
///
/// Created once per query from the first geocoding match and discarded after
/// the forecast call.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name (city, town, ...)
    pub name: String,
    /// Country name, when the geocoder supplies one
    pub country: Option<String>,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    /// Create a place with country
    #[must_use]
    pub fn with_country(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: Some(country),
        }
    }

    /// Display label for output headers, e.g. "Berlin, Germany"
    #[must_use]
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
