use serde::{Deserialize, Serialize};

/// Index of each compartment in the solver's state vector.
pub(crate) const MODERATE: usize = 0;
pub(crate) const HEAVY: usize = 1;
pub(crate) const TREATMENT: usize = 2;
pub(crate) const RECOVERED: usize = 3;

/// Sub-population counts of the four compartments.
///
/// The total population is not conserved: recruitment flows in and several
/// death terms flow out, so [`Compartments::total`] varies over a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compartments {
    /// Moderate drinkers (S).
    pub moderate: f64,

    /// Heavy drinkers (D).
    pub heavy: f64,

    /// People in treatment (T).
    pub treatment: f64,

    /// Recovered people (R).
    pub recovered: f64,
}

impl Compartments {
    /// Returns the current total population.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.moderate + self.heavy + self.treatment + self.recovered
    }
}

impl From<Compartments> for [f64; 4] {
    fn from(c: Compartments) -> Self {
        [c.moderate, c.heavy, c.treatment, c.recovered]
    }
}

impl From<[f64; 4]> for Compartments {
    fn from(y: [f64; 4]) -> Self {
        Self {
            moderate: y[MODERATE],
            heavy: y[HEAVY],
            treatment: y[TREATMENT],
            recovered: y[RECOVERED],
        }
    }
}
