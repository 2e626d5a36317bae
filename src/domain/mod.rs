pub mod listing;
pub mod logic;
pub mod mapping;
pub mod target;

pub use listing::CanonicalListing;
pub use mapping::SchemaMapper;
