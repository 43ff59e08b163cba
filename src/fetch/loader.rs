//! Taxonomy document loader: one blocking GET at a time, sequential
//! retries with linearly increasing delay, a TTL cache over successful
//! loads, and a sample-dataset fallback once retries are exhausted.

use std::thread;
use std::time::Duration;

use crate::catalog::record::CatalogRecord;
use crate::config::CatalogConfig;
use crate::fetch::cache::ResponseCache;
use crate::fetch::sample;
use crate::taxonomy::{extract_catalog, TaxonomyDocument};
use crate::{PelagosError, Result};

/// At most this many catalog documents are kept in the cache; the
/// encyclopedia loads one or two (fish and birds).
const CACHE_CAPACITY: usize = 16;

pub struct CatalogLoader {
    client: reqwest::blocking::Client,
    cache: ResponseCache<Vec<CatalogRecord>>,
    source_url: Option<String>,
    max_retries: u32,
    retry_delay: Duration,
}

impl CatalogLoader {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            cache: ResponseCache::new(
                CACHE_CAPACITY,
                Duration::from_secs(config.cache_ttl_secs),
            ),
            source_url: config.source_url.clone(),
            max_retries: config.max_retries,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }

    /// Load the catalog from the configured source URL. With no URL
    /// configured, serves the bundled sample dataset directly.
    pub fn load(&self) -> Result<Vec<CatalogRecord>> {
        match &self.source_url {
            Some(url) => self.load_url(url),
            None => {
                tracing::debug!("no source url configured, serving sample dataset");
                sample::sample_catalog()
            }
        }
    }

    /// Load the catalog from `url`, consulting the cache first. Fetch or
    /// parse failures are retried up to the attempt cap; after that the
    /// bundled sample dataset is served instead. The degradation is a
    /// product decision: a catalog page with sample data beats an error
    /// page.
    pub fn load_url(&self, url: &str) -> Result<Vec<CatalogRecord>> {
        if let Some(records) = self.cache.get(url) {
            tracing::debug!(url, records = records.len(), "catalog cache hit");
            return Ok(records);
        }

        match self.fetch_with_retries(url) {
            Ok(records) => {
                self.cache.insert(url.to_string(), records.clone());
                tracing::info!(url, records = records.len(), "catalog loaded");
                Ok(records)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "catalog fetch exhausted retries, serving sample dataset");
                sample::sample_catalog()
            }
        }
    }

    /// Drop all cached documents; the next load refetches.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    fn fetch_with_retries(&self, url: &str) -> Result<Vec<CatalogRecord>> {
        let mut last_err = PelagosError::Network("no fetch attempts configured".to_string());
        for attempt in 1..=self.max_retries.max(1) {
            match self.fetch_once(url) {
                Ok(records) => return Ok(records),
                Err(err) => {
                    tracing::warn!(url, attempt, error = %err, "catalog fetch attempt failed");
                    last_err = err;
                    if attempt < self.max_retries {
                        // Linear backoff: delay, 2*delay, 3*delay, ...
                        thread::sleep(self.retry_delay * attempt);
                    }
                }
            }
        }
        Err(last_err)
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<CatalogRecord>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| PelagosError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PelagosError::Network(format!("HTTP {status} from {url}")));
        }

        let body = response
            .text()
            .map_err(|e| PelagosError::Network(e.to_string()))?;
        let document = TaxonomyDocument::from_json(&body)?;
        Ok(extract_catalog(&document.into_nodes()))
    }
}
