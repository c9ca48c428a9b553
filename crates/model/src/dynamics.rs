use thiserror::Error;

use sober_core::VectorField;
use sober_solvers::transient::dormand_prince::{self, Config, Solution};

use crate::{Compartments, ParameterError, Parameters};

/// The four-compartment drinking-dynamics vector field.
///
/// Flows between compartments:
///
/// ```text
/// dS = lambda − beta_eff·S − mu·S + eta·R
/// dD = beta_eff·S − (mu + delta1 + gamma)·D
/// dT = gamma·D − (mu + delta2 + sigma)·T
/// dR = sigma·T − (mu + eta)·R
/// ```
///
/// where `beta_eff = beta1·(1 + alpha·D/N)` is the social-influence-
/// amplified transition rate and `N = S + D + T + R`. The total is
/// recomputed at every evaluation — recruitment and the death terms mean
/// `N` drifts over a run, so a cached initial total would bias the
/// influence term. A total of exactly zero divides to a non-finite
/// derivative, which propagates to the caller unchanged; nothing is
/// clamped and evaluation never panics for finite input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrinkingDynamics {
    params: Parameters,
}

impl DrinkingDynamics {
    /// Creates the vector field for a parameter set.
    #[must_use]
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    /// Returns the parameter set driving this field.
    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// The moderate-to-heavy transition rate at the given heavy-drinker
    /// count and total population.
    #[must_use]
    pub fn effective_beta(&self, heavy: f64, total: f64) -> f64 {
        self.params.beta1 * (1.0 + self.params.alpha * heavy / total)
    }
}

impl VectorField<4> for DrinkingDynamics {
    fn eval(&self, _t: f64, y: &[f64; 4]) -> [f64; 4] {
        let p = &self.params;
        let [s, d, t, r] = *y;

        let n = s + d + t + r;
        let beta = self.effective_beta(d, n);

        [
            p.lambda - beta * s - p.mu * s + p.eta * r,
            beta * s - (p.mu + p.delta1 + p.gamma) * d,
            p.gamma * d - (p.mu + p.delta2 + p.sigma) * t,
            p.sigma * t - (p.mu + p.eta) * r,
        ]
    }
}

/// Errors that can occur when simulating the model.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SimulateError {
    #[error(transparent)]
    Parameters(#[from] ParameterError),

    #[error(transparent)]
    Solver(#[from] dormand_prince::Error),
}

/// Integrates the model over `t_span` from `initial`.
///
/// # Errors
///
/// Returns an error if the parameter set is invalid, the time span is not
/// increasing, or the solver fails to converge.
pub fn simulate(
    params: &Parameters,
    initial: Compartments,
    t_span: [f64; 2],
    solver: &Config,
) -> Result<Solution<4>, SimulateError> {
    params.validate()?;
    let field = DrinkingDynamics::new(*params);
    Ok(dormand_prince::solve_unobserved(
        &field,
        t_span,
        initial.into(),
        solver,
    )?)
}
