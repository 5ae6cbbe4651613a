//! One geocoding match as returned in the `results` array.

use serde::{Deserialize, Serialize};

use super::AddressComponent;

/// Geographic point (lat/lng)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Bounding rectangle suited to displaying the result on a map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub northeast: LatLng,
    pub southwest: LatLng,
}

/// Precision of the returned location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// Precise geocode down to street address level
    Rooftop,
    /// Interpolated between two precise points, usually on a road
    RangeInterpolated,
    /// Geometric center of a line or polygon
    GeometricCenter,
    /// Approximate
    Approximate,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Viewport>,
}

/// A single candidate match.
///
/// Components keep the order in which the service listed them; attribute
/// lookups rely on that order (first match wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,

    pub formatted_address: String,

    pub geometry: Geometry,

    /// Candidate-level classification, e.g. ["street_address"]
    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,

    /// Set when the service could not match the whole query
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial_match: bool,
}

impl GeocodeCandidate {
    pub fn components(&self) -> &[AddressComponent] {
        &self.address_components
    }

    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }

    pub fn location(&self) -> LatLng {
        self.geometry.location
    }

    /// `(latitude, longitude)` of the candidate
    pub fn coordinates(&self) -> (f64, f64) {
        (self.geometry.location.lat, self.geometry.location.lng)
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.location.lat
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.location.lng
    }

    pub fn location_type(&self) -> Option<LocationType> {
        self.geometry.location_type
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.geometry.viewport.as_ref()
    }

    /// Whether the candidate itself is classified with `tag`
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}
