//! Fetch layer: retrieves the taxonomy document over HTTP with sequential
//! retries, caches successful loads for a bounded interval, and degrades
//! to a bundled sample dataset when the source is unreachable.

pub mod cache;
pub mod loader;
pub mod sample;

pub use cache::ResponseCache;
pub use loader::CatalogLoader;
pub use sample::sample_catalog;
