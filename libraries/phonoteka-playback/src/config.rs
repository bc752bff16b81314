//! Session configuration

use serde::{Deserialize, Serialize};

/// Tunable parameters for a player session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum history size (default: 50)
    pub history_limit: usize,

    /// Per-collection failure rate above which a collection is excluded
    /// from reliability-aware shuffles (default: 0.8)
    pub error_rate_threshold: f64,

    /// Consecutive load failures tolerated before the session asks the
    /// consumer to stop advancing (default: 5)
    pub max_consecutive_failures: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            error_rate_threshold: 0.8,
            max_consecutive_failures: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.history_limit, 50);
        assert!((config.error_rate_threshold - 0.8).abs() < f64::EPSILON);
        assert_eq!(config.max_consecutive_failures, 5);
    }
}
