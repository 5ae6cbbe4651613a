//! Administrative hierarchy tags used by the geocoding API.

use super::component::tags;
use super::AddressComponent;

/// Administrative component levels, from the broadest to the most local.
///
/// See: https://developers.google.com/maps/documentation/geocoding/requests-geocoding#Types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdminLevel {
    /// `country`
    Country,
    /// State / province (`administrative_area_level_1`)
    Region,
    /// County (`administrative_area_level_2`)
    County,
    /// Minor civil division (`administrative_area_level_3`)
    LocalAdmin,
    /// City / town (`locality`, or `postal_town` in the UK and Sweden)
    Locality,
    /// `sublocality`
    Sublocality,
    /// `neighborhood`
    Neighborhood,
}

impl AdminLevel {
    /// Map a component type tag to its level
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            tags::COUNTRY => Some(AdminLevel::Country),
            tags::ADMIN_AREA_1 => Some(AdminLevel::Region),
            tags::ADMIN_AREA_2 => Some(AdminLevel::County),
            tags::ADMIN_AREA_3 => Some(AdminLevel::LocalAdmin),
            tags::LOCALITY | tags::POSTAL_TOWN => Some(AdminLevel::Locality),
            tags::SUBLOCALITY => Some(AdminLevel::Sublocality),
            tags::NEIGHBORHOOD => Some(AdminLevel::Neighborhood),
            _ => None,
        }
    }

    /// The canonical type tag for this level
    pub fn tag(&self) -> &'static str {
        match self {
            AdminLevel::Country => tags::COUNTRY,
            AdminLevel::Region => tags::ADMIN_AREA_1,
            AdminLevel::County => tags::ADMIN_AREA_2,
            AdminLevel::LocalAdmin => tags::ADMIN_AREA_3,
            AdminLevel::Locality => tags::LOCALITY,
            AdminLevel::Sublocality => tags::SUBLOCALITY,
            AdminLevel::Neighborhood => tags::NEIGHBORHOOD,
        }
    }

    /// Get all levels in hierarchical order (country first)
    pub fn all() -> &'static [AdminLevel] {
        &[
            AdminLevel::Country,
            AdminLevel::Region,
            AdminLevel::County,
            AdminLevel::LocalAdmin,
            AdminLevel::Locality,
            AdminLevel::Sublocality,
            AdminLevel::Neighborhood,
        ]
    }

    /// Most local level a component carries, if it is administrative at all.
    pub fn of_component(component: &AddressComponent) -> Option<Self> {
        component
            .types
            .iter()
            .filter_map(|t| AdminLevel::from_tag(t))
            .max()
    }
}
