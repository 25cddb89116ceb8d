use chrono::{DateTime, Duration, Utc};
use log::{info, warn};

use crate::chain::{BlockSource, ProviderError};

use super::model::HalvingEstimate;
use super::{
    FALLBACK_BLOCK_SECS, FAR_SAMPLE_BLOCKS, HALVING_INTERVAL, NEAR_HALVING_THRESHOLD,
    NEAR_SAMPLE_BLOCKS,
};

/// Blocks left until the next halving boundary, always in
/// `1..=HALVING_INTERVAL` (a block right at a boundary means the next
/// halving is a full interval away).
pub fn blocks_remaining(height: u64) -> u64 {
    HALVING_INTERVAL - (height % HALVING_INTERVAL)
}

/// Sample size for the rolling average: 100 blocks while the halving is
/// far off, 50 once it is near, since near-term production is the
/// better predictor close to the event.
pub fn sample_size(blocks_remaining: u64) -> usize {
    if blocks_remaining > NEAR_HALVING_THRESHOLD {
        FAR_SAMPLE_BLOCKS
    } else {
        NEAR_SAMPLE_BLOCKS
    }
}

/// Linearly-weighted average of consecutive inter-block gaps over a
/// newest-first sample: pair `i` gets weight `i + 1`. A provider
/// returning out-of-order or duplicate timestamps yields zero or
/// negative gaps, which enter the sum as-is. `None` when fewer than two
/// timestamps are available.
fn weighted_average_secs(times: &[DateTime<Utc>]) -> Option<f64> {
    if times.len() < 2 {
        return None;
    }
    let mut total_weight = 0.0;
    let mut total_time = 0.0;
    for (i, pair) in times.windows(2).enumerate() {
        let weight = (i + 1) as f64;
        let gap = (pair[0] - pair[1]).num_seconds() as f64;
        total_weight += weight;
        total_time += weight * gap;
    }
    Some(total_time / total_weight)
}

/// Projects the date of the next block-reward halving from live chain
/// state. Every call fetches fresh data: the latest block, then a
/// window of recent block times for the average interval.
pub struct HalvingEstimator<S> {
    source: S,
}

impl<S: BlockSource> HalvingEstimator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One estimation pass. A failed latest-block fetch fails the whole
    /// call (no height may be fabricated); a failed or short
    /// recent-times fetch degrades to the 600 s target interval.
    pub async fn estimate(&self) -> Result<HalvingEstimate, ProviderError> {
        let latest = self.source.latest_block().await?;

        let remaining = blocks_remaining(latest.height);
        info!("blocks remaining until next halving: {remaining}");

        let avg_block_secs = match self.source.recent_block_times(sample_size(remaining)).await {
            Ok(times) => weighted_average_secs(&times).unwrap_or_else(|| {
                warn!("could not calculate average block time, using fallback");
                FALLBACK_BLOCK_SECS
            }),
            Err(err) => {
                warn!("recent block times unavailable ({err}), using fallback");
                FALLBACK_BLOCK_SECS
            }
        };
        info!("weighted average block time: {avg_block_secs} seconds");

        let seconds_remaining = (remaining as f64 * avg_block_secs).round() as i64;
        let next_halving = latest.time + Duration::seconds(seconds_remaining);
        info!("next halving estimated at {next_halving}");

        Ok(HalvingEstimate {
            next_halving,
            next_height: latest.height + remaining,
            blocks_remaining: remaining,
            avg_block_secs,
        })
    }
}
