//! Catalog fetching over HTTP
//!
//! One GET against the catalog endpoint with a bounded timeout. No retry,
//! no backoff, no pagination: the endpoint is expected to return the full
//! catalog in a single response.

mod client;

pub use client::{CatalogClient, FetchConfig};
