//! Typed name/value fragments of an address.

use serde::{Deserialize, Serialize};

/// Well-known component type tags.
pub mod tags {
    pub const STREET_ADDRESS: &str = "street_address";
    pub const STREET_NUMBER: &str = "street_number";
    pub const ROUTE: &str = "route";
    pub const NEIGHBORHOOD: &str = "neighborhood";
    pub const SUBLOCALITY: &str = "sublocality";
    pub const LOCALITY: &str = "locality";
    pub const POSTAL_TOWN: &str = "postal_town";
    pub const ADMIN_AREA_1: &str = "administrative_area_level_1";
    pub const ADMIN_AREA_2: &str = "administrative_area_level_2";
    pub const ADMIN_AREA_3: &str = "administrative_area_level_3";
    pub const COUNTRY: &str = "country";
    pub const POSTAL_CODE: &str = "postal_code";
    pub const ESTABLISHMENT: &str = "establishment";
    pub const POINT_OF_INTEREST: &str = "point_of_interest";
}

/// Which of a component's two names to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NameField {
    /// Full text, e.g. "California"
    #[default]
    Long,
    /// Abbreviated text, e.g. "CA"
    Short,
}

impl NameField {
    /// Suffix that selects this field in an attribute name (`state__short_name`).
    pub fn suffix(&self) -> &'static str {
        match self {
            NameField::Long => "__long_name",
            NameField::Short => "__short_name",
        }
    }
}

/// One address component, e.g. `{"long_name": "Winnetka", "short_name":
/// "Winnetka", "types": ["neighborhood", "political"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(long_name: &str, short_name: &str, types: &[&str]) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Whether this component carries the given type tag
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    pub fn name(&self, field: NameField) -> &str {
        match field {
            NameField::Long => &self.long_name,
            NameField::Short => &self.short_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_deserialize() {
        let json = r#"{"long_name": "California", "short_name": "CA",
                       "types": ["administrative_area_level_1", "political"]}"#;
        let component: AddressComponent = serde_json::from_str(json).unwrap();

        assert!(component.has_type(tags::ADMIN_AREA_1));
        assert!(component.has_type("political"));
        assert!(!component.has_type(tags::COUNTRY));
        assert_eq!(component.name(NameField::Long), "California");
        assert_eq!(component.name(NameField::Short), "CA");
    }

    #[test]
    fn test_default_field_is_long() {
        assert_eq!(NameField::default(), NameField::Long);
        assert_eq!(NameField::Short.suffix(), "__short_name");
    }
}
