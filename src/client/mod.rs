//! Transport layer: request building, the HTTP client and status handling.

mod geocoder;
mod request;
mod response;

pub use geocoder::{
    Credentials, Geocoder, GeocoderBuilder, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    GEOCODE_QUERY_URL,
};
pub use request::{GeocodeRequest, Query};
pub use response::parse_response;
