use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

use super::model::{BlockSample, BlocksResponse};
use super::{ProviderError, REQUEST_TIMEOUT_SECS};

/// Source of current chain state. The live implementation talks to
/// Blockchair; tests substitute stubs.
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Height and timestamp of the most recent block.
    async fn latest_block(&self) -> Result<BlockSample, ProviderError>;

    /// Timestamps of the `count` most recent blocks, newest first.
    async fn recent_block_times(
        &self,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ProviderError>;
}

#[derive(Clone)]
pub struct BlockchairClient {
    client: Client,
    api_url: String,
}

impl BlockchairClient {
    pub fn new(api_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("reqwest client");
        Self { client, api_url }
    }

    /// One GET against the bulk blocks endpoint; non-2xx statuses and
    /// body decode failures both surface as transport errors.
    async fn fetch_blocks(&self, query: &str) -> Result<BlocksResponse, ProviderError> {
        let url = format!("{}?{}", self.api_url, query);
        debug!("requesting block data from: {url}");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<BlocksResponse>().await?)
    }
}

#[async_trait]
impl BlockSource for BlockchairClient {
    async fn latest_block(&self) -> Result<BlockSample, ProviderError> {
        info!("fetching the latest block");
        let listing = self.fetch_blocks("limit=1").await?;
        let row = listing.data.first().ok_or_else(|| {
            warn!("no data found for the latest block");
            ProviderError::EmptyResponse
        })?;
        let sample = BlockSample {
            height: row.id,
            time: row.time_utc()?,
        };
        info!(
            "latest block: height={} time={}",
            sample.height, sample.time
        );
        Ok(sample)
    }

    async fn recent_block_times(
        &self,
        count: usize,
    ) -> Result<Vec<DateTime<Utc>>, ProviderError> {
        info!("fetching the {count} most recent block times");
        let listing = self
            .fetch_blocks(&format!("s=time(desc)&limit={count}"))
            .await?;
        listing.data.iter().map(|row| row.time_utc()).collect()
    }
}
