//! Status classification of decoded response bodies.

use serde_json::Value;
use tracing::warn;

use crate::error::{GeocoderError, Result, ServiceStatus};
use crate::results::ResultCollection;

/// Turn a decoded response body into results, or into the service error it
/// reports.
///
/// Non-OK bodies are kept whole in [`GeocoderError::Service`] so callers can
/// tell "no results" from "quota exceeded" and read `error_message`.
pub fn parse_response(url: &str, body: Value) -> Result<ResultCollection> {
    let status = body
        .get("status")
        .and_then(Value::as_str)
        .map(ServiceStatus::from_code)
        .ok_or_else(|| GeocoderError::MalformedResponse("response has no status".to_string()))?;

    if !status.is_ok() {
        let message = body
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or("");
        warn!("Geocoding service returned {}: {}", status, message);

        return Err(GeocoderError::Service {
            status,
            url: url.to_string(),
            response: Some(body),
        });
    }

    ResultCollection::from_value(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://maps.googleapis.com/maps/api/geocode/json?address=nowhere";

    fn ok_body() -> Value {
        json!({
            "status": "OK",
            "results": [{
                "address_components": [],
                "formatted_address": "Brooklyn, NY, USA",
                "geometry": {"location": {"lat": 40.6782, "lng": -73.9442}},
                "types": ["sublocality"]
            }]
        })
    }

    #[test]
    fn test_ok_body() {
        let results = parse_response(URL, ok_body()).unwrap();
        assert_eq!(results.formatted_address(), "Brooklyn, NY, USA");
    }

    #[test]
    fn test_status_classification() {
        let cases = [
            ("ZERO_RESULTS", ServiceStatus::ZeroResults),
            ("OVER_QUERY_LIMIT", ServiceStatus::OverQueryLimit),
            ("REQUEST_DENIED", ServiceStatus::RequestDenied),
            ("INVALID_REQUEST", ServiceStatus::InvalidRequest),
            ("UNKNOWN_ERROR", ServiceStatus::UnknownError),
        ];

        for (code, expected) in cases {
            let body = json!({"status": code, "results": []});
            match parse_response(URL, body.clone()) {
                Err(GeocoderError::Service {
                    status,
                    url,
                    response,
                }) => {
                    assert_eq!(status, expected);
                    assert_eq!(url, URL);
                    assert_eq!(response, Some(body));
                }
                other => panic!("expected service error for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_error_message_preserved() {
        let body = json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        });
        let err = parse_response(URL, body).unwrap_err();
        match err {
            GeocoderError::Service { response, .. } => {
                let response = response.unwrap();
                assert_eq!(response["error_message"], "The provided API key is invalid.");
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_status() {
        let err = parse_response(URL, json!({"results": []})).unwrap_err();
        assert!(matches!(err, GeocoderError::MalformedResponse(_)));
    }

    #[test]
    fn test_ok_without_results_is_malformed() {
        let err = parse_response(URL, json!({"status": "OK", "results": []})).unwrap_err();
        assert!(matches!(err, GeocoderError::MalformedResponse(_)));
    }
}
