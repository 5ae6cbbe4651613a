//! HTTP client for the geocoding API.

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use super::request::{GeocodeRequest, Query};
use super::response::parse_response;
use crate::error::{GeocoderError, Result};
use crate::results::ResultCollection;
use crate::signing::RequestSigner;

pub const GEOCODE_QUERY_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_USER_AGENT: &str = concat!("geocoder/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How requests are authenticated.
#[derive(Clone, Default)]
pub enum Credentials {
    /// Anonymous, rate-limited access
    #[default]
    None,
    /// Standard API key, sent as the `key` parameter
    ApiKey(String),
    /// Business account: every request URL is signed
    Business(RequestSigner),
}

impl Credentials {
    /// Business credentials; fails with `InvalidKey` before any request is made.
    pub fn business(client_id: &str, private_key: &str) -> Result<Self> {
        Ok(Credentials::Business(RequestSigner::new(client_id, private_key)?))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::None => write!(f, "None"),
            Credentials::ApiKey(_) => write!(f, "ApiKey(<redacted>)"),
            Credentials::Business(signer) => write!(f, "Business({})", signer.client_id()),
        }
    }
}

/// Geocoding API client.
///
/// Each call issues exactly one GET; there are no retries.
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    endpoint: String,
    credentials: Credentials,
    language: Option<String>,
    region: Option<String>,
}

/// Builder for [`Geocoder`]
#[derive(Debug, Clone)]
pub struct GeocoderBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
    credentials: Credentials,
    language: Option<String>,
    region: Option<String>,
}

impl Default for GeocoderBuilder {
    fn default() -> Self {
        Self {
            endpoint: GEOCODE_QUERY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            credentials: Credentials::None,
            language: None,
            region: None,
        }
    }
}

impl GeocoderBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Default result language for requests built by the client
    pub fn language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Default region bias for requests built by the client
    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn build(self) -> Result<Geocoder> {
        // Reject a bad endpoint now rather than on the first request
        Url::parse(&self.endpoint)?;

        let client = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Geocoder {
            client,
            endpoint: self.endpoint,
            credentials: self.credentials,
            language: self.language,
            region: self.region,
        })
    }
}

impl Geocoder {
    pub fn builder() -> GeocoderBuilder {
        GeocoderBuilder::default()
    }

    /// Anonymous client against the default endpoint
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::builder()
            .credentials(Credentials::ApiKey(api_key.into()))
            .build()
    }

    pub fn with_client_id(client_id: &str, private_key: &str) -> Result<Self> {
        Self::builder()
            .credentials(Credentials::business(client_id, private_key)?)
            .build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A request for `query` with the client's default language and region.
    pub fn request(&self, query: Query) -> GeocodeRequest {
        let mut request = GeocodeRequest::new(query);
        if let Some(ref language) = self.language {
            request.language = language.clone();
        }
        if let Some(ref region) = self.region {
            request.region = region.clone();
        }
        request
    }

    /// Final request URL, signed for business credentials.
    pub fn request_url(&self, request: &GeocodeRequest) -> Result<String> {
        let mut params = request.params();

        match &self.credentials {
            Credentials::Business(signer) => signer.sign(&self.endpoint, &params),
            other => {
                if let Credentials::ApiKey(key) = other {
                    params.push(("key", key.clone()));
                }
                let mut url = Url::parse(&self.endpoint)?;
                url.query_pairs_mut().extend_pairs(params);
                Ok(url.into())
            }
        }
    }

    /// Send `request` and classify the response.
    pub async fn geocode_with(&self, request: &GeocodeRequest) -> Result<ResultCollection> {
        let url = self.request_url(request)?;
        debug!("Geocoding '{}' via {}", request.query, self.endpoint);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(GeocoderError::HttpStatus {
                code: status.as_u16(),
                url,
                body,
            });
        }

        let body: Value = response.json().await?;
        let results = parse_response(&url, body)?;

        info!(
            "Geocoded '{}': {} candidate(s)",
            request.query,
            results.len()
        );
        Ok(results)
    }

    /// Geocode a postal address.
    pub async fn geocode(&self, address: &str) -> Result<ResultCollection> {
        let request = self.request(Query::Address(address.to_string()));
        self.geocode_with(&request).await
    }

    /// Find the addresses closest to a coordinate pair.
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<ResultCollection> {
        let request = self.request(Query::LatLng { lat, lng });
        self.geocode_with(&request).await
    }

    /// `(latitude, longitude)` of the best match for `address`.
    pub async fn address_to_latlng(&self, address: &str) -> Result<(f64, f64)> {
        Ok(self.geocode(address).await?.coordinates())
    }

    /// Formatted address of the best match for `(lat, lng)`.
    pub async fn latlng_to_address(&self, lat: f64, lng: f64) -> Result<String> {
        Ok(self
            .reverse_geocode(lat, lng)
            .await?
            .formatted_address()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "1600 amphitheatre mountain view ca";

    #[test]
    fn test_anonymous_url() {
        let geocoder = Geocoder::new().unwrap();
        let url = geocoder.request_url(&geocoder.request(Query::Address(ADDRESS.to_string()))).unwrap();

        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/geocode/json\
             ?address=1600+amphitheatre+mountain+view+ca\
             &components=&bounds=&region=&language=&sensor=false"
        );
    }

    #[test]
    fn test_api_key_url() {
        let geocoder = Geocoder::with_api_key("abc123").unwrap();
        let url = geocoder
            .request_url(&GeocodeRequest::reverse(40.714224, -73.961452))
            .unwrap();

        assert!(url.contains("latlng=40.714224%2C-73.961452"));
        assert!(url.ends_with("&sensor=false&key=abc123"));
    }

    #[test]
    fn test_business_url_is_signed() {
        let geocoder = Geocoder::builder()
            .endpoint("https://maps.google.com/maps/api/geocode/json")
            .credentials(
                Credentials::business("gme-businessname", "vNIXE0xscrmjlyV-12Nj_BvUPaw=").unwrap(),
            )
            .build()
            .unwrap();

        let url = geocoder.request_url(&GeocodeRequest::address(ADDRESS)).unwrap();
        assert!(url.ends_with("&client=gme-businessname&signature=7bVsUv6kyRHlG0DBAIhKHfX-96M="));
    }

    #[test]
    fn test_bad_private_key_fails_before_request() {
        let err = Geocoder::with_client_id("gme-businessname", "%%%").unwrap_err();
        assert!(matches!(err, GeocoderError::InvalidKey(_)));
    }

    #[test]
    fn test_bad_endpoint() {
        let err = Geocoder::builder().endpoint("::nope").build().unwrap_err();
        assert!(matches!(err, GeocoderError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_defaults_applied() {
        let geocoder = Geocoder::builder()
            .language(Some("fr".to_string()))
            .region(Some("ca".to_string()))
            .build()
            .unwrap();

        let request = geocoder.request(Query::Address("Montreal".to_string()));
        assert_eq!(request.language, "fr");
        assert_eq!(request.region, "ca");
    }

    #[test]
    fn test_credentials_debug_redacts() {
        let debug = format!("{:?}", Credentials::ApiKey("secret".to_string()));
        assert!(!debug.contains("secret"));
    }
}
