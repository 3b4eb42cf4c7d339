pub mod client;
pub mod error;
pub mod listing;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use listing::{normalize_listing, ListingShape, RECOMMENDED_LIMIT};
