//! Baseline scenario constants.
//!
//! Rates are per month and the recruitment inflow is people per month. The
//! initial condition is the drinking-free equilibrium `S = lambda/mu`
//! seeded with a single heavy drinker.

use crate::{Compartments, Parameter, Parameters};

/// Integration window in months.
pub const TIME_SPAN: [f64; 2] = [0.0, 200.0];

/// Relative variations applied to each swept parameter.
pub const VARIATIONS: [f64; 7] = [-0.3, -0.2, -0.1, 0.0, 0.1, 0.2, 0.3];

/// Parameters examined by the default sensitivity sweep.
pub const SWEPT_PARAMETERS: [Parameter; 4] = [
    Parameter::Beta1,
    Parameter::Gamma,
    Parameter::Sigma,
    Parameter::Alpha,
];

/// The baseline parameter set.
#[must_use]
pub fn baseline() -> Parameters {
    Parameters {
        lambda: 2.44e6,
        mu: 0.005,
        delta1: 0.01,
        delta2: 0.008,
        beta1: 0.148,
        alpha: 0.25,
        gamma: 93.4,
        sigma: 0.02,
        eta: 0.015,
    }
}

/// The baseline initial condition for a parameter set.
#[must_use]
pub fn initial_condition(params: &Parameters) -> Compartments {
    Compartments {
        moderate: params.lambda / params.mu,
        heavy: 1.0,
        treatment: 0.0,
        recovered: 0.0,
    }
}
