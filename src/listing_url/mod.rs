pub(crate) mod canonicalize;
mod normalize;

pub use canonicalize::resolve_listing_url;
pub use normalize::normalize_listing_url;
