//! Geocoder - a client library for the Google Geocoding API
//!
//! Parses geocoding responses into alias-aware result collections, signs
//! request URLs for business accounts, and provides a thin HTTP client and
//! configuration layer for the `geocode` binary.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod results;
pub mod signing;

pub use client::{Credentials, GeocodeRequest, Geocoder, Query};
pub use error::{GeocoderError, Result, ServiceStatus};
pub use models::{AddressComponent, GeocodeCandidate, NameField};
pub use resolver::{AddressLookup, AddressValidator};
pub use results::ResultCollection;
pub use signing::{sign_url, RequestSigner};
