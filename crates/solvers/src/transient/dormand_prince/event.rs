/// Event emitted by the Dormand–Prince solver for each trajectory sample.
///
/// Step 0 is the initial state before any integration. Steps 1..N are
/// emitted after each accepted step; rejected steps emit nothing.
#[derive(Debug, Clone, Copy)]
pub struct Event<const N: usize> {
    /// The accepted-step number (0 for the initial state).
    pub step: usize,

    /// The sample time.
    pub t: f64,

    /// The step size that produced this sample (0 for the initial state).
    pub h: f64,

    /// The sampled state.
    pub state: [f64; N],
}
