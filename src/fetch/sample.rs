//! Bundled fallback dataset: a small Mediterranean taxonomy shipped with
//! the crate and run through the same extraction pipeline as remote data.

use crate::catalog::record::CatalogRecord;
use crate::taxonomy::{extract_catalog, TaxonomyDocument};
use crate::Result;

const SAMPLE_TAXONOMY: &str = include_str!("../../data/sample_taxonomy.json");

/// Extract the bundled sample catalog. Goes through the real parser, so a
/// broken fixture fails loudly in tests rather than silently shipping.
pub fn sample_catalog() -> Result<Vec<CatalogRecord>> {
    let document = TaxonomyDocument::from_json(SAMPLE_TAXONOMY)?;
    Ok(extract_catalog(&document.into_nodes()))
}
