//! Taxonomy ingestion: wire-format adapter, typed tree nodes, and the
//! leaf-record extraction pass that turns a nested taxonomy into a flat
//! catalog.

pub mod extract;
pub mod node;
pub mod schema;

pub use extract::{extract_catalog, FamilyMap, UNCLASSIFIED_FAMILY};
pub use node::{TaxonNode, TaxonProperty};
pub use schema::TaxonomyDocument;
