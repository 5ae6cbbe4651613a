//! Heuristics classifying a candidate as a usable postal address.
//!
//! The service does not document what makes an address "valid"; the checks
//! here are inferred from typical responses and can be swapped per call.

use crate::models::{tags, AdminLevel, GeocodeCandidate};

/// Decides whether a candidate is a valid postal address.
///
/// Closures `Fn(&GeocodeCandidate) -> bool` implement this trait too.
pub trait AddressValidator {
    fn is_valid(&self, candidate: &GeocodeCandidate) -> bool;
}

impl<F> AddressValidator for F
where
    F: Fn(&GeocodeCandidate) -> bool,
{
    fn is_valid(&self, candidate: &GeocodeCandidate) -> bool {
        self(candidate)
    }
}

/// Requires a street-level component (`route` or `street_number`), an
/// administrative component between `locality` and
/// `administrative_area_level_1`, and a `country` component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentHeuristic;

impl AddressValidator for ComponentHeuristic {
    fn is_valid(&self, candidate: &GeocodeCandidate) -> bool {
        let components = candidate.components();

        let has_street = components
            .iter()
            .any(|c| c.has_type(tags::ROUTE) || c.has_type(tags::STREET_NUMBER));

        let has_admin = components.iter().any(|c| {
            c.types
                .iter()
                .filter_map(|t| AdminLevel::from_tag(t))
                .any(|level| level > AdminLevel::Country && level <= AdminLevel::Locality)
        });

        let has_country = components.iter().any(|c| c.has_type(tags::COUNTRY));

        has_street && has_admin && has_country
    }
}

/// Trusts the service's own classification: the candidate is typed
/// `street_address`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreetAddressType;

impl AddressValidator for StreetAddressType {
    fn is_valid(&self, candidate: &GeocodeCandidate) -> bool {
        candidate.has_type(tags::STREET_ADDRESS)
    }
}

/// Classify with the default [`ComponentHeuristic`].
pub fn valid_address(candidate: &GeocodeCandidate) -> bool {
    ComponentHeuristic.is_valid(candidate)
}
