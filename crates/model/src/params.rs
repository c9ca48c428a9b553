use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rate constants of the drinking-dynamics model.
///
/// All rates are per month; `lambda` is a population inflow in people per
/// month. Every value is a non-negative real ([`Parameters::validate`]).
/// The set is immutable during a solve — perturbation analyses build a
/// fresh copy per run via [`Parameter::with_value`] instead of mutating a
/// shared set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Recruitment into the moderate-drinker compartment (people/month).
    pub lambda: f64,

    /// Natural death rate.
    pub mu: f64,

    /// Excess death rate of heavy drinkers.
    pub delta1: f64,

    /// Excess death rate while in treatment.
    pub delta2: f64,

    /// Baseline moderate-to-heavy transition rate.
    pub beta1: f64,

    /// Social-influence amplification strength.
    pub alpha: f64,

    /// Rate at which heavy drinkers enter treatment.
    pub gamma: f64,

    /// Rate of treatment completion into recovery.
    pub sigma: f64,

    /// Relapse rate from recovered back to moderate drinking.
    pub eta: f64,
}

/// A parameter value that is negative or non-finite.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("parameter {0} must be finite and non-negative")]
pub struct ParameterError(pub Parameter);

impl Parameters {
    /// Checks that every rate is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending [`Parameter`].
    pub fn validate(&self) -> Result<(), ParameterError> {
        for parameter in Parameter::ALL {
            let value = parameter.value_in(self);
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError(parameter));
            }
        }
        Ok(())
    }
}

/// One named rate of [`Parameters`].
///
/// The enum is the explicit accessor mapping used to perturb parameters
/// generically: each variant reads and overrides exactly one field, so an
/// unknown parameter name is unrepresentable and no runtime name lookup
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Lambda,
    Mu,
    Delta1,
    Delta2,
    Beta1,
    Alpha,
    Gamma,
    Sigma,
    Eta,
}

impl Parameter {
    /// All nine parameters, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Lambda,
        Self::Mu,
        Self::Delta1,
        Self::Delta2,
        Self::Beta1,
        Self::Alpha,
        Self::Gamma,
        Self::Sigma,
        Self::Eta,
    ];

    /// Returns the conventional name of this parameter.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lambda => "lambda",
            Self::Mu => "mu",
            Self::Delta1 => "delta1",
            Self::Delta2 => "delta2",
            Self::Beta1 => "beta1",
            Self::Alpha => "alpha",
            Self::Gamma => "gamma",
            Self::Sigma => "sigma",
            Self::Eta => "eta",
        }
    }

    /// Reads this parameter's value from a set.
    #[must_use]
    pub fn value_in(self, params: &Parameters) -> f64 {
        match self {
            Self::Lambda => params.lambda,
            Self::Mu => params.mu,
            Self::Delta1 => params.delta1,
            Self::Delta2 => params.delta2,
            Self::Beta1 => params.beta1,
            Self::Alpha => params.alpha,
            Self::Gamma => params.gamma,
            Self::Sigma => params.sigma,
            Self::Eta => params.eta,
        }
    }

    /// Returns a copy of `base` with this parameter set to `value`.
    #[must_use]
    pub fn with_value(self, base: &Parameters, value: f64) -> Parameters {
        let mut params = *base;
        match self {
            Self::Lambda => params.lambda = value,
            Self::Mu => params.mu = value,
            Self::Delta1 => params.delta1 = value,
            Self::Delta2 => params.delta2 = value,
            Self::Beta1 => params.beta1 = value,
            Self::Alpha => params.alpha = value,
            Self::Gamma => params.gamma = value,
            Self::Sigma => params.sigma = value,
            Self::Eta => params.eta = value,
        }
        params
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
