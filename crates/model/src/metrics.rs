use serde::{Deserialize, Serialize};

use sober_core::Trajectory;

use crate::compartments::{HEAVY, RECOVERED};

/// Summary metrics reduced from one solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Peak heavy-drinker count over the whole trajectory (Dmax).
    pub peak_heavy: f64,

    /// Recovered count at the final sample (Rend).
    pub final_recovered: f64,
}

impl Metrics {
    /// Reduces a trajectory to its summary metrics.
    ///
    /// Non-finite samples surface as non-finite metrics rather than being
    /// skipped; an empty trajectory yields NaN for both.
    #[must_use]
    pub fn from_trajectory(trajectory: &Trajectory<4>) -> Self {
        Self {
            peak_heavy: trajectory.component_max(HEAVY),
            final_recovered: trajectory
                .final_state()
                .map_or(f64::NAN, |state| state[RECOVERED]),
        }
    }

    /// Returns `true` when both metrics are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.peak_heavy.is_finite() && self.final_recovered.is_finite()
    }
}
