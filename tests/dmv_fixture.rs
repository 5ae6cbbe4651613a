use geocoder::models::LocationType;
use geocoder::{AddressLookup, GeocoderError, NameField, ResultCollection};
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn load_dmv() -> ResultCollection {
    let body = fs::read_to_string(fixture_path("dmv_sherman_way.json")).expect("read fixture");
    body.parse().expect("parse fixture")
}

#[test]
fn test_neighborhood_per_candidate() {
    let results = load_dmv();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].neighborhood(), Some("Winnetka"));
    assert_eq!(results[1].neighborhood(), Some("East Colorado Springs"));
    assert_eq!(results.at(1).unwrap().get("neighborhood"), Some("East Colorado Springs"));
}

#[test]
fn test_collection_attributes_use_first_candidate() {
    let results = load_dmv();

    assert_eq!(results.establishment(), Some("DMV"));
    assert_eq!(results.get("establishment"), Some("DMV"));
    assert_eq!(results.point_of_interest(), Some("DMV"));
    assert_eq!(results.neighborhood(), Some("Winnetka"));
    assert_eq!(results.formatted_address(), results[0].formatted_address());
    assert_eq!(results.coordinates(), results[0].coordinates());
}

#[test]
fn test_aliases_and_name_fields() {
    let results = load_dmv();
    let second = &results[1];

    assert_eq!(second.city(), Some("Colorado Springs"));
    assert_eq!(second.get("city"), second.get("locality"));
    assert_eq!(second.state(), Some("Colorado"));
    assert_eq!(second.get("state__short_name"), Some("CO"));
    assert_eq!(second.get_field("route", NameField::Short), Some("N Union Blvd"));
    assert_eq!(second.get("country__long_name"), Some("United States"));
    assert_eq!(second.get("zip_code"), Some("80909"));
    assert_eq!(second.county(), Some("El Paso County"));
    assert_eq!(second.sublocality(), None);
}

#[test]
fn test_candidate_metadata() {
    let results = load_dmv();
    let best = results.best();

    assert!(best.partial_match);
    assert_eq!(best.location_type(), Some(LocationType::Approximate));
    assert!(best.has_type("establishment"));
    assert!((best.latitude() - 34.2011359).abs() < 1e-9);
    assert!((best.longitude() + 118.5861532).abs() < 1e-9);
}

#[test]
fn test_fixture_is_a_valid_address() {
    let results = load_dmv();
    assert!(results.valid_address());
    assert!(results.iter().all(geocoder::resolver::valid_address));
}

#[test]
fn test_iteration_matches_raw_order() {
    let body = fs::read_to_string(fixture_path("dmv_sherman_way.json")).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    let results: ResultCollection = body.parse().unwrap();

    let raw_addresses: Vec<&str> = raw["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["formatted_address"].as_str().unwrap())
        .collect();
    let addresses: Vec<&str> = results.iter().map(|c| c.formatted_address()).collect();
    assert_eq!(addresses, raw_addresses);
}

#[test]
fn test_truncated_fixture_is_malformed() {
    let body = fs::read_to_string(fixture_path("dmv_sherman_way.json")).unwrap();
    let mut raw: serde_json::Value = serde_json::from_str(&body).unwrap();
    raw["results"][1]["geometry"]
        .as_object_mut()
        .unwrap()
        .remove("location");

    let err = ResultCollection::from_value(raw).unwrap_err();
    assert!(matches!(err, GeocoderError::MalformedResponse(_)));
}
