//! Forward and reverse request parameters.

use std::fmt;

/// What to look up: a free-form address or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Address(String),
    LatLng { lat: f64, lng: f64 },
}

impl Query {
    /// Interpret user input: `"lat,lng"` (no space needed) is a reverse
    /// lookup, anything else an address.
    pub fn from_input(input: &str) -> Self {
        let parts: Vec<f64> = input
            .split(',')
            .filter_map(|p| p.trim().parse().ok())
            .collect();

        match (input.split(',').count(), parts.as_slice()) {
            (2, [lat, lng]) if lat.abs() <= 90.0 && lng.abs() <= 180.0 => Query::LatLng {
                lat: *lat,
                lng: *lng,
            },
            _ => Query::Address(input.to_string()),
        }
    }

    /// Query parameter name and value
    fn param(&self) -> (&'static str, String) {
        match self {
            Query::Address(address) => ("address", address.clone()),
            Query::LatLng { .. } => ("latlng", self.to_string()),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Address(address) => f.write_str(address),
            Query::LatLng { lat, lng } => write!(f, "{:.6},{:.6}", lat, lng),
        }
    }
}

/// A geocoding request.
///
/// Unset biasing parameters are still sent, as empty strings, so the
/// parameter list (and therefore a business signature) has a fixed shape:
/// `address|latlng, components, bounds, region, language, sensor`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeRequest {
    pub query: Query,
    /// Component filter, e.g. "country:US|postal_code:94043"
    pub components: String,
    /// Viewport bias, "south,west|north,east"
    pub bounds: String,
    /// ccTLD region bias, e.g. "us"
    pub region: String,
    /// Result language, e.g. "en"
    pub language: String,
    /// Whether the query comes from a location sensor
    pub sensor: bool,
}

impl GeocodeRequest {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            components: String::new(),
            bounds: String::new(),
            region: String::new(),
            language: String::new(),
            sensor: false,
        }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Self::new(Query::Address(address.into()))
    }

    pub fn reverse(lat: f64, lng: f64) -> Self {
        Self::new(Query::LatLng { lat, lng })
    }

    pub fn components(mut self, components: impl Into<String>) -> Self {
        self.components = components.into();
        self
    }

    pub fn bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = bounds.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Ordered query parameters, ready for encoding or signing.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            self.query.param(),
            ("components", self.components.clone()),
            ("bounds", self.bounds.clone()),
            ("region", self.region.clone()),
            ("language", self.language.clone()),
            ("sensor", self.sensor.to_string()),
        ]
    }
}
