//! Address-component resolution: alias table, attribute lookups and
//! validity classification.

pub mod alias;
mod lookup;
pub mod validity;

pub use alias::{canonical_tag, resolve, resolve_field, Attribute, ALIASES};
pub use lookup::AddressLookup;
pub use validity::{valid_address, AddressValidator, ComponentHeuristic, StreetAddressType};
