// crates/simulate_activity/src/config.rs

use std::time::Duration;

use activity_marker::MARKER_TAG;
use find_candidate_files::CandidateFilter;

/// Wait between two cycles.
pub const INTERVAL: Duration = Duration::from_secs(26);

/// Time the marker stays in the file before the original content is restored.
pub const RESTORE_DELAY: Duration = Duration::from_secs(2);

/// Every tunable of the activity loop, fixed at startup.
#[derive(Clone, Debug)]
pub struct ActivityConfig {
    pub interval: Duration,
    pub restore_delay: Duration,
    pub marker_tag: String,
    pub filter: CandidateFilter,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            interval: INTERVAL,
            restore_delay: RESTORE_DELAY,
            marker_tag: MARKER_TAG.to_string(),
            filter: CandidateFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = ActivityConfig::default();
        assert_eq!(config.interval, Duration::from_secs(26));
        assert_eq!(config.restore_delay, Duration::from_secs(2));
        assert_eq!(config.marker_tag, MARKER_TAG);
        assert_eq!(config.filter, CandidateFilter::default());
    }
}
