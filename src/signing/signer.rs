//! HMAC-SHA1 URL signing for business (client ID) accounts.
//!
//! The service recomputes the signature over `path?query` of the request it
//! receives, so the query must be serialized exactly as it is sent: parameters
//! in caller order, form-encoded (space as `+`), followed by `client=<id>`.
//! The URL-safe base64 signature is appended as the last parameter.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::form_urlencoded;
use url::Url;

use crate::error::{GeocoderError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Signs request URLs with a client ID and its private key.
#[derive(Clone)]
pub struct RequestSigner {
    client_id: String,
    key: Vec<u8>,
}

impl RequestSigner {
    /// Create a signer from a client ID and a URL-safe base64 private key.
    pub fn new(client_id: impl Into<String>, private_key: &str) -> Result<Self> {
        let key = URL_SAFE
            .decode(private_key.trim())
            .map_err(|e| GeocoderError::InvalidKey(e.to_string()))?;

        if key.is_empty() {
            return Err(GeocoderError::InvalidKey("key is empty".to_string()));
        }

        Ok(Self {
            client_id: client_id.into(),
            key,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Form-encode `params` in the given order.
    pub fn canonical_query<K, V>(params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .finish()
    }

    /// URL-safe base64 HMAC-SHA1 of `path_and_query`.
    pub fn signature(&self, path_and_query: &str) -> Result<String> {
        let mut mac = HmacSha1::new_from_slice(&self.key)
            .map_err(|e| GeocoderError::InvalidKey(e.to_string()))?;
        mac.update(path_and_query.as_bytes());
        Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
    }

    /// Append `params`, `client` and `signature` to `url`.
    ///
    /// Any query already present on `url` is kept in front of `params` and
    /// covered by the signature.
    pub fn sign<K, V>(&self, url: &str, params: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = Url::parse(url)?;
        url.set_fragment(None);
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
            .append_pair("client", &self.client_id);

        let to_sign = format!("{}?{}", url.path(), url.query().unwrap_or_default());
        let signature = self.signature(&to_sign)?;

        Ok(format!("{}&signature={}", url, signature))
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("client_id", &self.client_id)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// One-shot signing: decode `private_key` and sign `url` with `params`.
pub fn sign_url<K, V>(url: &str, params: &[(K, V)], client_id: &str, private_key: &str) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    RequestSigner::new(client_id, private_key)?.sign(url, params)
}
