use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::PelagosError;

/// Catalog engine configuration. Defaults mirror the encyclopedia's
/// shipped settings: six cards per page, three fetch attempts with a one
/// second base delay, responses cached for five minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where to fetch the taxonomy document; `None` serves the bundled
    /// sample dataset.
    pub source_url: Option<String>,
    pub page_size: usize,
    pub cache_ttl_secs: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            page_size: 6,
            cache_ttl_secs: 300,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig, PelagosError> {
    let contents = std::fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&contents)
        .map_err(|e| PelagosError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &CatalogConfig) -> Result<(), PelagosError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| PelagosError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
