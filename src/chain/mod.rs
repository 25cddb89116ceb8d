pub mod client;
pub mod model;

pub use client::{BlockSource, BlockchairClient};
pub use model::BlockSample;

use thiserror::Error;

/// Public Blockchair bulk endpoint for Bitcoin blocks.
pub const DEFAULT_API_URL: &str = "https://api.blockchair.com/bitcoin/blocks";

/// Upper bound on a single provider request, so a stalled upstream
/// cannot pin a request handler.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Ways a fetch from the block provider can fail.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("block provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("block provider returned no blocks")]
    EmptyResponse,
    #[error("unparseable block timestamp {0:?}")]
    BadTimestamp(String),
}
