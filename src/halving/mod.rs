pub mod estimator;
pub mod model;

pub use estimator::HalvingEstimator;
pub use model::{HalvingEstimate, ProjectedHalving};

/// Blocks between consecutive halving events (protocol constant).
pub const HALVING_INTERVAL: u64 = 210_000;

/// Below this many remaining blocks the halving counts as "near" and a
/// smaller, more locally representative sample is used.
pub const NEAR_HALVING_THRESHOLD: u64 = 10_000;

/// Recent blocks sampled while the halving is still far away.
pub const FAR_SAMPLE_BLOCKS: usize = 100;

/// Recent blocks sampled once the halving is near.
pub const NEAR_SAMPLE_BLOCKS: usize = 50;

/// Bitcoin's target block interval, used when no usable sample exists.
pub const FALLBACK_BLOCK_SECS: f64 = 600.0;

/// The block subsidy reaches zero after this many halvings; nothing is
/// projected past it.
pub const MAX_HALVINGS: u64 = 64;
