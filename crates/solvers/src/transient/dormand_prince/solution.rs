use sober_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Reached the end of the time span.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an adaptive integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// The sampled trajectory, including the initial state.
    pub trajectory: Trajectory<N>,

    /// Number of accepted steps.
    pub accepted_steps: usize,

    /// Number of rejected step attempts.
    pub rejected_steps: usize,
}
