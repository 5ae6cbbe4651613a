//! TOML configuration: endpoint, credentials and request defaults.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::client::{Credentials, Geocoder, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, GEOCODE_QUERY_URL};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub credentials: CredentialsConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: GEOCODE_QUERY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Either `api_key`, or `client_id` together with `private_key`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    pub api_key: Option<String>,
    pub client_id: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub language: Option<String>,
    pub region: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Resolve the configured credentials. A business pair takes precedence
    /// over an API key.
    pub fn credentials(&self) -> Result<Credentials> {
        let creds = &self.credentials;
        match (&creds.client_id, &creds.private_key) {
            (Some(client_id), Some(private_key)) => {
                Credentials::business(client_id, private_key).context("Invalid business credentials")
            }
            (Some(_), None) => bail!("credentials.client_id is set without credentials.private_key"),
            (None, Some(_)) => bail!("credentials.private_key is set without credentials.client_id"),
            (None, None) => Ok(creds
                .api_key
                .clone()
                .map(Credentials::ApiKey)
                .unwrap_or_default()),
        }
    }

    pub fn geocoder(&self) -> Result<Geocoder> {
        let geocoder = Geocoder::builder()
            .endpoint(self.api.endpoint.clone())
            .timeout(Duration::from_secs(self.api.timeout_secs))
            .user_agent(self.api.user_agent.clone())
            .credentials(self.credentials()?)
            .language(self.defaults.language.clone())
            .region(self.defaults.region.clone())
            .build()
            .context("Failed to create geocoding client")?;
        Ok(geocoder)
    }
}
