use super::alias::{resolve, resolve_field};
use crate::models::{tags, AddressComponent, GeocodeCandidate, NameField};

/// Attribute lookups over an address component list.
///
/// Implementors only expose their components; every accessor is resolved
/// through the alias table in [`super::alias`].
///
/// # Examples
/// ```rust
/// use geocoder::models::{AddressComponent, NameField};
/// use geocoder::resolver::AddressLookup;
///
/// struct Parts(Vec<AddressComponent>);
/// impl AddressLookup for Parts {
///     fn address_components(&self) -> &[AddressComponent] { &self.0 }
/// }
///
/// let parts = Parts(vec![AddressComponent::new(
///     "California", "CA", &["administrative_area_level_1", "political"],
/// )]);
/// assert_eq!(parts.state(), Some("California"));
/// assert_eq!(parts.get("state__short_name"), Some("CA"));
/// assert_eq!(parts.get_field("state", NameField::Short), Some("CA"));
/// assert_eq!(parts.city(), None);
/// ```
pub trait AddressLookup {
    fn address_components(&self) -> &[AddressComponent];

    /// Resolve a tag, alias or suffixed name (`city`, `state__short_name`).
    #[inline]
    fn get(&self, name: &str) -> Option<&str> {
        resolve(self.address_components(), name)
    }

    #[inline]
    fn get_field(&self, name: &str, field: NameField) -> Option<&str> {
        resolve_field(self.address_components(), name, field)
    }

    fn street_number(&self) -> Option<&str> {
        self.get(tags::STREET_NUMBER)
    }

    fn route(&self) -> Option<&str> {
        self.get(tags::ROUTE)
    }

    fn neighborhood(&self) -> Option<&str> {
        self.get(tags::NEIGHBORHOOD)
    }

    fn sublocality(&self) -> Option<&str> {
        self.get(tags::SUBLOCALITY)
    }

    fn city(&self) -> Option<&str> {
        self.get("city")
    }

    fn county(&self) -> Option<&str> {
        self.get("county")
    }

    fn state(&self) -> Option<&str> {
        self.get("state")
    }

    fn country(&self) -> Option<&str> {
        self.get(tags::COUNTRY)
    }

    fn postal_code(&self) -> Option<&str> {
        self.get(tags::POSTAL_CODE)
    }

    fn establishment(&self) -> Option<&str> {
        self.get(tags::ESTABLISHMENT)
    }

    fn point_of_interest(&self) -> Option<&str> {
        self.get(tags::POINT_OF_INTEREST)
    }
}

impl AddressLookup for GeocodeCandidate {
    fn address_components(&self) -> &[AddressComponent] {
        &self.address_components
    }
}
