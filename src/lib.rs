pub mod catalog;
pub mod config;
pub mod fetch;
pub mod taxonomy;

pub use crate::catalog::daily::pick_of_the_day;
pub use crate::catalog::record::CatalogRecord;
pub use crate::catalog::store::{CatalogStore, FilterUpdate, SortDirection, SortKey};
pub use crate::config::CatalogConfig;
pub use crate::fetch::loader::CatalogLoader;
pub use crate::taxonomy::extract::extract_catalog;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PelagosError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Empty catalog: no records to pick from")]
    EmptyCatalog,

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for PelagosError {
    fn from(err: serde_json::Error) -> Self {
        PelagosError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PelagosError>;
