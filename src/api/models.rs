use serde::Serialize;

use crate::chain::BlockchairClient;
use crate::halving::HalvingEstimator;

/// Shared application state: the estimator over the live block client.
/// Nothing here is mutable; every request computes from fresh data.
pub struct AppState {
    pub estimator: HalvingEstimator<BlockchairClient>,
}

#[derive(Serialize)]
pub struct HalvingDateResponse {
    pub halving_date: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn estimation_failed() -> Self {
        Self {
            error: "Could not estimate the next Bitcoin halving date.".to_string(),
        }
    }
}
