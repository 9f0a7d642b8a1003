//! Per-issue outcomes and run-scoped counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of processing one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    Triggered,
    Skipped,
    Failed,
}

impl ActionOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Triggered => "triggered",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome counts for one orchestrator run.
///
/// The fields are only advanced through [`RunCounters::record`], so
/// `total == triggered + skipped + failed` holds at every observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCounters {
    total: u64,
    triggered: u64,
    skipped: u64,
    failed: u64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one processed issue.
    pub fn record(&mut self, outcome: ActionOutcome) {
        self.total += 1;
        match outcome {
            ActionOutcome::Triggered => self.triggered += 1,
            ActionOutcome::Skipped => self.skipped += 1,
            ActionOutcome::Failed => self.failed += 1,
        }
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn triggered(&self) -> u64 {
        self.triggered
    }

    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    pub const fn failed(&self) -> u64 {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn outcome_strategy() -> impl Strategy<Value = ActionOutcome> {
        prop_oneof![
            Just(ActionOutcome::Triggered),
            Just(ActionOutcome::Skipped),
            Just(ActionOutcome::Failed),
        ]
    }

    #[test]
    fn test_new_counters_are_zero() {
        let counters = RunCounters::new();
        assert_eq!(counters.total(), 0);
        assert_eq!(counters.triggered(), 0);
        assert_eq!(counters.skipped(), 0);
        assert_eq!(counters.failed(), 0);
    }

    #[test]
    fn test_record_increments_matching_counter() {
        let mut counters = RunCounters::new();
        counters.record(ActionOutcome::Triggered);
        counters.record(ActionOutcome::Skipped);
        counters.record(ActionOutcome::Skipped);
        counters.record(ActionOutcome::Failed);

        assert_eq!(counters.total(), 4);
        assert_eq!(counters.triggered(), 1);
        assert_eq!(counters.skipped(), 2);
        assert_eq!(counters.failed(), 1);
    }

    proptest! {
        #[test]
        fn prop_total_equals_sum_of_outcomes(
            outcomes in prop::collection::vec(outcome_strategy(), 0..200)
        ) {
            let mut counters = RunCounters::new();
            for outcome in outcomes {
                counters.record(outcome);
                prop_assert_eq!(
                    counters.total(),
                    counters.triggered() + counters.skipped() + counters.failed()
                );
            }
        }
    }
}
