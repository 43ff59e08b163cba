//! The flat species catalog: record type, queryable store, and the
//! deterministic record-of-the-day pick.

pub mod daily;
pub mod record;
pub mod store;

pub use daily::pick_of_the_day;
pub use record::CatalogRecord;
pub use store::{CatalogStats, CatalogStore, FilterUpdate, Page, QueryState, SortDirection, SortKey};
