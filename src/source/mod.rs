//! The one asynchronous edge of the engine: fetching a raw listing
//! snapshot. Everything downstream of the fetch is synchronous and pure.

use crate::config::EngineConfig;
use crate::error::{HomescoutError, Result};
use crate::types::Listing;
use async_trait::async_trait;

/// Supplies raw listing snapshots. Awaited once per catalog refresh.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Listing>>;
}

/// Fetches the snapshot from a REST endpoint returning either a bare JSON
/// array or `{"listings": [...]}`.
pub struct HttpListingSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpListingSource {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| HomescoutError::Config(e.to_string()))?;
        Ok(HttpListingSource {
            client,
            endpoint: config.listings_endpoint.clone(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(HomescoutError::Fetch(format!(
                "{} returned {}",
                self.endpoint,
                response.status()
            )));
        }
        let body: serde_json::Value = response.json().await?;
        Ok(parse_snapshot(&body))
    }
}

/// Serves a fixed snapshot from memory. For tests and embedded use.
#[derive(Debug, Clone, Default)]
pub struct StaticListingSource {
    listings: Vec<Listing>,
}

impl StaticListingSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        StaticListingSource { listings }
    }
}

#[async_trait]
impl ListingSource for StaticListingSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.clone())
    }
}

/// Pull listing records out of a snapshot body, skipping records that
/// cannot be ingested rather than failing the batch.
fn parse_snapshot(body: &serde_json::Value) -> Vec<Listing> {
    let empty = Vec::new();
    let records = match body {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(obj) => obj
            .get("listings")
            .and_then(|v| v.as_array())
            .unwrap_or(&empty),
        _ => &empty,
    };

    let mut listings = Vec::with_capacity(records.len());
    for record in records {
        match Listing::from_json(record) {
            Ok(listing) => listings.push(listing),
            Err(e) => tracing::warn!(error = %e, "skipping malformed listing record"),
        }
    }
    listings
}
