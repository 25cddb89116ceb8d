use chrono::{DateTime, Duration, Utc};

use super::{HALVING_INTERVAL, MAX_HALVINGS};

/// Result of one estimation pass. Computed fresh per request from
/// freshly fetched chain state; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct HalvingEstimate {
    /// Projected timestamp of the next halving, anchored to the latest
    /// block's time rather than wall-clock now.
    pub next_halving: DateTime<Utc>,
    /// Height at which the next halving occurs.
    pub next_height: u64,
    /// Blocks left until `next_height`, in `1..=HALVING_INTERVAL`.
    pub blocks_remaining: u64,
    /// Weighted average seconds per block used for the projection.
    pub avg_block_secs: f64,
}

/// One future halving event derived from an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectedHalving {
    /// 1-based halving number (height / HALVING_INTERVAL).
    pub ordinal: u64,
    pub height: u64,
    pub time: DateTime<Utc>,
}

impl HalvingEstimate {
    /// Project up to `count` upcoming halvings by stepping the fixed
    /// interval duration forward from the next one. Pure; stops at the
    /// last halving that still pays a subsidy.
    pub fn upcoming(&self, count: usize) -> Vec<ProjectedHalving> {
        let step =
            Duration::seconds((HALVING_INTERVAL as f64 * self.avg_block_secs).round() as i64);
        (0..count as u64)
            .map(|i| {
                let height = self.next_height + i * HALVING_INTERVAL;
                ProjectedHalving {
                    ordinal: height / HALVING_INTERVAL,
                    height,
                    time: self.next_halving + step * i as i32,
                }
            })
            .take_while(|halving| halving.ordinal <= MAX_HALVINGS)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn estimate(next_height: u64, avg_block_secs: f64) -> HalvingEstimate {
        HalvingEstimate {
            next_halving: Utc.with_ymd_and_hms(2024, 4, 20, 0, 0, 0).unwrap(),
            next_height,
            blocks_remaining: 1,
            avg_block_secs,
        }
    }

    #[test]
    fn projects_evenly_spaced_halvings() {
        let est = estimate(840_000, 600.0);
        let halvings = est.upcoming(3);
        assert_eq!(halvings.len(), 3);
        assert_eq!(halvings[0].ordinal, 4);
        assert_eq!(halvings[2].height, 1_260_000);

        let step = Duration::seconds(210_000 * 600);
        assert_eq!(halvings[1].time, est.next_halving + step);
        assert_eq!(halvings[2].time, est.next_halving + step * 2);
    }

    #[test]
    fn stops_at_the_last_subsidized_halving() {
        let est = estimate(63 * HALVING_INTERVAL, 600.0);
        let halvings = est.upcoming(5);
        assert_eq!(halvings.len(), 2);
        assert_eq!(halvings.last().unwrap().ordinal, 64);
    }
}
