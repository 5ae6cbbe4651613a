//! Attribute-name parsing and the alias table.
//!
//! An attribute name is either a component type tag (`route`,
//! `postal_code`), a friendlier alias for one (`city`, `state`), and may carry
//! a `__long_name` / `__short_name` suffix selecting which name to read.
//! Aliases are translated after the suffix is stripped, so `state__short_name`
//! reads the short name of the `administrative_area_level_1` component.

use crate::models::{tags, AddressComponent, NameField};

/// Alias → component type tag. Names not listed here are used as tags verbatim.
pub const ALIASES: &[(&str, &str)] = &[
    ("city", tags::LOCALITY),
    ("state", tags::ADMIN_AREA_1),
    ("province", tags::ADMIN_AREA_1),
    ("county", tags::ADMIN_AREA_2),
    ("zip_code", tags::POSTAL_CODE),
];

/// Translate an alias to its type tag; unknown names pass through unchanged.
pub fn canonical_tag(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, tag)| *tag)
        .unwrap_or(name)
}

/// A parsed attribute name: the type tag to match and the name field to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub tag: &'a str,
    pub field: NameField,
}

impl<'a> Attribute<'a> {
    pub fn parse(name: &'a str) -> Self {
        let (base, field) = split_suffix(name);
        Self {
            tag: canonical_tag(base),
            field,
        }
    }

    /// First component carrying this attribute's tag, in list order.
    pub fn find<'c>(&self, components: &'c [AddressComponent]) -> Option<&'c AddressComponent> {
        components.iter().find(|c| c.has_type(self.tag))
    }

    pub fn read<'c>(&self, components: &'c [AddressComponent]) -> Option<&'c str> {
        self.find(components).map(|c| c.name(self.field))
    }
}

fn split_suffix(name: &str) -> (&str, NameField) {
    for field in [NameField::Long, NameField::Short] {
        if let Some(base) = name.strip_suffix(field.suffix()) {
            return (base, field);
        }
    }
    (name, NameField::default())
}

/// Resolve `name` against a component list.
///
/// Returns `None` when no component carries the tag; an empty string means
/// the component exists with an empty name.
pub fn resolve<'c>(components: &'c [AddressComponent], name: &str) -> Option<&'c str> {
    Attribute::parse(name).read(components)
}

/// Like [`resolve`], with the name field chosen explicitly. `name` must not
/// carry a suffix.
pub fn resolve_field<'c>(
    components: &'c [AddressComponent],
    name: &str,
    field: NameField,
) -> Option<&'c str> {
    Attribute {
        tag: canonical_tag(name),
        field,
    }
    .read(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components() -> Vec<AddressComponent> {
        vec![
            AddressComponent::new("1600", "1600", &["street_number"]),
            AddressComponent::new("Amphitheatre Parkway", "Amphitheatre Pkwy", &["route"]),
            AddressComponent::new("Mountain View", "Mountain View", &["locality", "political"]),
            AddressComponent::new(
                "Santa Clara County",
                "Santa Clara County",
                &["administrative_area_level_2", "political"],
            ),
            AddressComponent::new(
                "California",
                "CA",
                &["administrative_area_level_1", "political"],
            ),
            AddressComponent::new("United States", "US", &["country", "political"]),
            AddressComponent::new("94043", "94043", &["postal_code"]),
        ]
    }

    #[test]
    fn test_parse_plain_name() {
        let attr = Attribute::parse("route");
        assert_eq!(attr.tag, "route");
        assert_eq!(attr.field, NameField::Long);
    }

    #[test]
    fn test_parse_suffix_then_alias() {
        let attr = Attribute::parse("state__short_name");
        assert_eq!(attr.tag, "administrative_area_level_1");
        assert_eq!(attr.field, NameField::Short);

        let attr = Attribute::parse("country__long_name");
        assert_eq!(attr.tag, "country");
        assert_eq!(attr.field, NameField::Long);
    }

    #[test]
    fn test_unknown_suffix_is_part_of_tag() {
        let attr = Attribute::parse("route__full_name");
        assert_eq!(attr.tag, "route__full_name");
        assert_eq!(resolve(&components(), "route__full_name"), None);
    }

    #[test]
    fn test_resolve_postal_code() {
        let comps = components();
        assert_eq!(resolve(&comps, "postal_code"), Some("94043"));
        assert_eq!(resolve(&comps, "postal_code__short_name"), Some("94043"));
        assert_eq!(resolve(&comps, "zip_code"), Some("94043"));
    }

    #[test]
    fn test_resolve_long_and_short() {
        let comps = components();
        assert_eq!(resolve(&comps, "route"), Some("Amphitheatre Parkway"));
        assert_eq!(resolve(&comps, "route__short_name"), Some("Amphitheatre Pkwy"));
        assert_eq!(resolve(&comps, "state"), Some("California"));
        assert_eq!(resolve(&comps, "state__short_name"), Some("CA"));
        assert_eq!(resolve(&comps, "country__short_name"), Some("US"));
        assert_eq!(resolve(&comps, "county"), Some("Santa Clara County"));
    }

    #[test]
    fn test_city_equals_locality() {
        let comps = components();
        assert_eq!(resolve(&comps, "city"), resolve(&comps, "locality"));
        assert_eq!(
            resolve(&comps, "city__short_name"),
            resolve(&comps, "locality__short_name")
        );
    }

    #[test]
    fn test_missing_component_is_none() {
        let comps = components();
        assert_eq!(resolve(&comps, "neighborhood"), None);
        assert_eq!(resolve(&comps, "premise__short_name"), None);
        assert_eq!(resolve(&[], "postal_code"), None);
    }

    #[test]
    fn test_empty_name_is_not_absent() {
        let comps = vec![AddressComponent::new("", "", &["postal_code"])];
        assert_eq!(resolve(&comps, "postal_code"), Some(""));
    }

    #[test]
    fn test_first_match_wins() {
        let comps = vec![
            AddressComponent::new("DMV", "DMV", &["point_of_interest", "establishment"]),
            AddressComponent::new("Other", "Other", &["establishment"]),
        ];
        assert_eq!(resolve(&comps, "establishment"), Some("DMV"));
        assert_eq!(resolve(&comps, "point_of_interest"), Some("DMV"));
    }

    #[test]
    fn test_resolve_field() {
        let comps = components();
        assert_eq!(resolve_field(&comps, "state", NameField::Short), Some("CA"));
        assert_eq!(
            resolve_field(&comps, "route", NameField::Long),
            Some("Amphitheatre Parkway")
        );
    }
}
