use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::ProviderError;

/// Height and timestamp of one observed block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSample {
    pub height: u64,
    pub time: DateTime<Utc>,
}

/// Envelope Blockchair wraps every block listing in.
#[derive(Debug, Deserialize)]
pub struct BlocksResponse {
    pub data: Vec<BlockRow>,
}

/// One row of the bulk blocks endpoint. Blockchair returns many more
/// fields per block; only height and time matter here.
#[derive(Debug, Deserialize)]
pub struct BlockRow {
    pub id: u64,
    pub time: String,
}

/// Blockchair timestamps are UTC, space-separated: "2024-04-20 00:09:27".
const BLOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl BlockRow {
    pub fn time_utc(&self) -> Result<DateTime<Utc>, ProviderError> {
        NaiveDateTime::parse_from_str(&self.time, BLOCK_TIME_FORMAT)
            .map(|t| t.and_utc())
            .map_err(|_| ProviderError::BadTimestamp(self.time.clone()))
    }
}
