//! Ordered candidates returned by one geocoding query.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{GeocoderError, Result};
use crate::models::{AddressComponent, GeocodeCandidate};
use crate::resolver::{AddressLookup, AddressValidator, ComponentHeuristic};

/// Non-empty, ordered list of candidates.
///
/// Index 0 is the service's best match. Collection-level accessors
/// ([`AddressLookup`], [`formatted_address`](Self::formatted_address),
/// [`coordinates`](Self::coordinates), ...) read candidate 0 only and never
/// aggregate across candidates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultCollection {
    candidates: Vec<GeocodeCandidate>,
}

impl ResultCollection {
    /// Build from a decoded response body (`{"results": [...]}`) or the bare
    /// `results` array.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(results) => Self::from_results(results),
            Value::Object(mut body) => match body.remove("results") {
                Some(Value::Array(results)) => Self::from_results(results),
                Some(_) => Err(GeocoderError::MalformedResponse(
                    "`results` is not an array".to_string(),
                )),
                None => Err(GeocoderError::MalformedResponse(
                    "response has no `results` field".to_string(),
                )),
            },
            _ => Err(GeocoderError::MalformedResponse(
                "expected a results array or response object".to_string(),
            )),
        }
    }

    /// Build from raw candidate records, validating required structure.
    pub fn from_results(results: Vec<Value>) -> Result<Self> {
        let candidates = results
            .into_iter()
            .enumerate()
            .map(|(i, raw)| parse_candidate(i, raw))
            .collect::<Result<Vec<_>>>()?;

        Self::from_candidates(candidates)
    }

    pub fn from_candidates(candidates: Vec<GeocodeCandidate>) -> Result<Self> {
        if candidates.is_empty() {
            return Err(GeocoderError::MalformedResponse(
                "empty candidate list".to_string(),
            ));
        }

        debug!("Parsed {} geocoding candidate(s)", candidates.len());
        Ok(Self { candidates })
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always `false` for a constructed collection.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Bounds-checked positional access
    pub fn at(&self, index: usize) -> Result<&GeocodeCandidate> {
        self.candidates
            .get(index)
            .ok_or(GeocoderError::IndexOutOfRange {
                index,
                len: self.candidates.len(),
            })
    }

    /// The best (first) candidate
    pub fn best(&self) -> &GeocodeCandidate {
        &self.candidates[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeocodeCandidate> {
        self.candidates.iter()
    }

    pub fn candidates(&self) -> &[GeocodeCandidate] {
        &self.candidates
    }

    pub fn formatted_address(&self) -> &str {
        self.best().formatted_address()
    }

    pub fn coordinates(&self) -> (f64, f64) {
        self.best().coordinates()
    }

    pub fn latitude(&self) -> f64 {
        self.best().latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.best().longitude()
    }

    /// Whether the best candidate looks like a postal address, using the
    /// default [`ComponentHeuristic`].
    pub fn valid_address(&self) -> bool {
        self.valid_address_with(&ComponentHeuristic)
    }

    pub fn valid_address_with<V: AddressValidator + ?Sized>(&self, validator: &V) -> bool {
        validator.is_valid(self.best())
    }
}

fn parse_candidate(index: usize, raw: Value) -> Result<GeocodeCandidate> {
    if raw.get("formatted_address").and_then(Value::as_str).is_none() {
        return Err(GeocoderError::MalformedResponse(format!(
            "result {index} has no formatted_address"
        )));
    }

    if !raw
        .pointer("/geometry/location")
        .is_some_and(Value::is_object)
    {
        return Err(GeocoderError::MalformedResponse(format!(
            "result {index} has no geometry.location"
        )));
    }

    serde_json::from_value(raw)
        .map_err(|e| GeocoderError::MalformedResponse(format!("result {index}: {e}")))
}

impl AddressLookup for ResultCollection {
    fn address_components(&self) -> &[AddressComponent] {
        self.best().components()
    }
}

impl Index<usize> for ResultCollection {
    type Output = GeocodeCandidate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a GeocodeCandidate;
    type IntoIter = std::slice::Iter<'a, GeocodeCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl IntoIterator for ResultCollection {
    type Item = GeocodeCandidate;
    type IntoIter = std::vec::IntoIter<GeocodeCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl TryFrom<Vec<GeocodeCandidate>> for ResultCollection {
    type Error = GeocoderError;

    fn try_from(candidates: Vec<GeocodeCandidate>) -> Result<Self> {
        Self::from_candidates(candidates)
    }
}

impl FromStr for ResultCollection {
    type Err = GeocoderError;

    /// Parse a JSON response body or results array.
    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|e| GeocoderError::MalformedResponse(format!("invalid JSON: {e}")))?;
        Self::from_value(value)
    }
}

impl fmt::Display for ResultCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatted_address())
    }
}
