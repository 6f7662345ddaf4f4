use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Point targets the average-rounds table is keyed by.
pub const POINT_BUCKETS: [u32; 4] = [5, 7, 9, 11];

/// Average rounds assumed for a point target outside the table.
const FALLBACK_AVG_ROUNDS: u32 = 6;

/// Time settings used when creating a new tournament.
///
/// Stored per tournament, not globally; organizers start from
/// `TimeConfig::default()` and adjust. All durations are minutes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeConfig {
    /// Minutes a 4-round singles game takes.
    pub minutes_per_4_rounds_singles: u32,
    /// Minutes a 4-round doubles game takes.
    pub minutes_per_4_rounds_doubles: u32,
    /// Expected rounds per game in points mode, keyed by the points target.
    pub avg_rounds_for_points_mode: BTreeMap<u32, u32>,
    /// Minutes between consecutive matches on the same board.
    pub break_between_matches: u32,
    /// Minutes between tournament phases.
    pub break_between_phases: u32,
    /// Whether both semifinals run at the same time.
    pub parallel_semifinals: bool,
    /// Whether the final and third-place match run at the same time.
    pub parallel_finals: bool,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            minutes_per_4_rounds_singles: 10,
            minutes_per_4_rounds_doubles: 15,
            avg_rounds_for_points_mode: BTreeMap::from([(5, 4), (7, 6), (9, 8), (11, 10)]),
            break_between_matches: 5,
            break_between_phases: 10,
            parallel_semifinals: true,
            parallel_finals: true,
        }
    }
}

impl TimeConfig {
    /// Expected rounds for a game played to `points_to_win` points.
    ///
    /// Unlisted targets fall back to 6 rounds.
    pub fn avg_rounds_for_points(&self, points_to_win: u32) -> u32 {
        self.avg_rounds_for_points_mode
            .get(&points_to_win)
            .copied()
            .unwrap_or(FALLBACK_AVG_ROUNDS)
    }

    /// Check the invariants a stored configuration must satisfy: positive
    /// durations and an average-rounds table keyed by exactly the known
    /// point targets.
    pub fn validate(&self) -> Result<(), TimeConfigError> {
        let durations = [
            ("minutesPer4RoundsSingles", self.minutes_per_4_rounds_singles),
            ("minutesPer4RoundsDoubles", self.minutes_per_4_rounds_doubles),
            ("breakBetweenMatches", self.break_between_matches),
            ("breakBetweenPhases", self.break_between_phases),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(TimeConfigError::NonPositiveDuration { field });
            }
        }

        let keys: Vec<u32> = self.avg_rounds_for_points_mode.keys().copied().collect();
        if keys != POINT_BUCKETS {
            return Err(TimeConfigError::BadPointBuckets);
        }
        if self.avg_rounds_for_points_mode.values().any(|&v| v == 0) {
            return Err(TimeConfigError::BadPointBuckets);
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum TimeConfigError {
    #[error("{field} must be a positive number of minutes")]
    NonPositiveDuration { field: &'static str },
    #[error("avgRoundsForPointsMode must map exactly the point targets 5, 7, 9 and 11 to positive round counts")]
    BadPointBuckets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = TimeConfig::default();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn defaults_match_shipped_values() {
        let config = TimeConfig::default();
        assert_eq!(config.minutes_per_4_rounds_singles, 10);
        assert_eq!(config.minutes_per_4_rounds_doubles, 15);
        assert_eq!(config.break_between_matches, 5);
        assert_eq!(config.break_between_phases, 10);
        assert!(config.parallel_semifinals);
        assert!(config.parallel_finals);

        let keys: Vec<u32> = config.avg_rounds_for_points_mode.keys().copied().collect();
        assert_eq!(keys, POINT_BUCKETS);
    }

    #[test]
    fn bucket_lookup_with_fallback() {
        let config = TimeConfig::default();
        assert_eq!(config.avg_rounds_for_points(5), 4);
        assert_eq!(config.avg_rounds_for_points(11), 10);
        // Unlisted point targets assume six rounds.
        assert_eq!(config.avg_rounds_for_points(15), 6);
    }

    #[test]
    fn serde_uses_persisted_field_names() {
        let json = serde_json::to_value(TimeConfig::default()).unwrap();
        assert_eq!(json["minutesPer4RoundsSingles"], 10);
        assert_eq!(json["avgRoundsForPointsMode"]["7"], 6);
        assert_eq!(json["parallelFinals"], true);
    }

    #[test]
    fn serde_round_trips() {
        let config = TimeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TimeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn zero_duration_fails_validation() {
        let mut config = TimeConfig::default();
        config.break_between_matches = 0;
        assert_eq!(
            config.validate(),
            Err(TimeConfigError::NonPositiveDuration {
                field: "breakBetweenMatches"
            })
        );
    }

    #[test]
    fn missing_bucket_fails_validation() {
        let mut config = TimeConfig::default();
        config.avg_rounds_for_points_mode.remove(&9);
        assert_eq!(config.validate(), Err(TimeConfigError::BadPointBuckets));
    }
}
