//! Serializable handoff for visualization tooling.
//!
//! The plotting layer lives outside this workspace and consumes numeric
//! output read-only: the baseline trajectory as ordered samples, and the
//! sensitivity sweep output per parameter.

use serde::{Deserialize, Serialize};

use sober_core::Trajectory;

use crate::{Compartments, Metrics, sweep::SensitivityResult};

/// One baseline trajectory sample in report form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample time in months.
    pub t: f64,

    #[serde(flatten)]
    pub compartments: Compartments,
}

/// The full read-only handoff: baseline run plus sweep output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Baseline trajectory, in time order.
    pub baseline: Vec<Sample>,

    /// Summary metrics of the baseline run.
    pub baseline_metrics: Metrics,

    /// Sensitivity results, one per swept parameter, in request order.
    pub sensitivity: Vec<SensitivityResult>,
}

impl Report {
    /// Builds the report from a baseline trajectory and sweep output.
    #[must_use]
    pub fn new(trajectory: &Trajectory<4>, sensitivity: Vec<SensitivityResult>) -> Self {
        Self {
            baseline: trajectory
                .iter()
                .map(|(t, &state)| Sample {
                    t,
                    compartments: Compartments::from(state),
                })
                .collect(),
            baseline_metrics: Metrics::from_trajectory(trajectory),
            sensitivity,
        }
    }
}
