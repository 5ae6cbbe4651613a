//! Response data model for the geocoding API.

pub mod admin;
pub mod candidate;
pub mod component;

pub use admin::AdminLevel;
pub use candidate::{GeocodeCandidate, Geometry, LatLng, LocationType, Viewport};
pub use component::{tags, AddressComponent, NameField};
