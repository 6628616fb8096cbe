/// Remote store API module
///
/// This module handles:
/// - HTTP calls to list, fetch and create products (client.rs)
/// - The failure taxonomy for those calls (error.rs)
/// - The cacheable reads and their query keys (query.rs)

pub mod client;
pub mod error;
pub mod query;

pub use client::CatalogClient;
pub use error::FetchError;
pub use query::{CatalogData, CatalogQuery};
