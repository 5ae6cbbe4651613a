//! Result collections built from geocoding responses.

mod collection;

pub use collection::ResultCollection;
