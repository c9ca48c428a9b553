//! One-factor-at-a-time parameter sensitivity sweep.
//!
//! Each (parameter, variation) combination perturbs a single rate
//! multiplicatively, re-solves the model over the full time span from the
//! same initial condition, and reduces the run to its summary
//! [`Metrics`]. Combinations are independent: every run gets its own
//! parameter snapshot with exactly one field overridden, so the baseline
//! set is never touched, perturbations never compound across sweep
//! dimensions, and runs evaluate in parallel under the `parallel` feature.
//!
//! A combination whose solve fails (non-convergence, or a perturbation
//! that drives the rate negative) is recorded with an empty outcome and
//! the sweep continues — partial results beat none for a diagnostic tool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sober_solvers::transient::dormand_prince::Config;

use crate::{Compartments, Metrics, Parameter, ParameterError, Parameters, scenario, simulate};

/// Configuration for a sensitivity sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Parameters to vary, in report order.
    pub parameters: Vec<Parameter>,

    /// Relative variations applied to each parameter, in report order.
    /// A variation `v` sets the parameter to `baseline · (1 + v)`.
    pub variations: Vec<f64>,

    /// Solver configuration used for every run.
    pub solver: Config,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            parameters: scenario::SWEPT_PARAMETERS.to_vec(),
            variations: scenario::VARIATIONS.to_vec(),
            solver: Config::default(),
        }
    }
}

/// Errors that can occur when validating a sweep.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("variation list must not be empty")]
    EmptyVariations,

    #[error("variation {0} is not finite")]
    NonFiniteVariation(f64),

    #[error(transparent)]
    Parameters(#[from] ParameterError),
}

/// Outcome of one (parameter, variation) combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Relative variation applied to the baseline value.
    pub variation: f64,

    /// The perturbed parameter value actually used.
    pub value: f64,

    /// Summary metrics, or `None` when the solve for this combination
    /// failed.
    pub outcome: Option<Metrics>,
}

/// Sensitivity of the summary metrics to one parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    /// The varied parameter.
    pub parameter: Parameter,

    /// Its baseline value.
    pub baseline_value: f64,

    /// One point per configured variation, in variation order.
    pub points: Vec<SweepPoint>,
}

/// Runs the sweep against a baseline parameter set.
///
/// Results are ordered like `config.parameters`, and each result's points
/// like `config.variations`, whether or not the runs execute in parallel.
/// `baseline` is read-only throughout.
///
/// # Errors
///
/// Returns an error if the baseline parameters are invalid or the
/// variation list is empty or contains a non-finite entry. Failures of
/// individual combinations are not errors; they appear as points with an
/// empty outcome.
pub fn run(
    baseline: &Parameters,
    initial: Compartments,
    t_span: [f64; 2],
    config: &SweepConfig,
) -> Result<Vec<SensitivityResult>, SweepError> {
    baseline.validate()?;
    if config.variations.is_empty() {
        return Err(SweepError::EmptyVariations);
    }
    if let Some(&bad) = config.variations.iter().find(|v| !v.is_finite()) {
        return Err(SweepError::NonFiniteVariation(bad));
    }

    let combinations: Vec<(Parameter, f64)> = config
        .parameters
        .iter()
        .flat_map(|&parameter| {
            config
                .variations
                .iter()
                .map(move |&variation| (parameter, variation))
        })
        .collect();

    #[cfg(feature = "parallel")]
    let points: Vec<SweepPoint> = combinations
        .par_iter()
        .map(|&(parameter, variation)| {
            evaluate(baseline, initial, t_span, &config.solver, parameter, variation)
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let points: Vec<SweepPoint> = combinations
        .iter()
        .map(|&(parameter, variation)| {
            evaluate(baseline, initial, t_span, &config.solver, parameter, variation)
        })
        .collect();

    let per_parameter = config.variations.len();
    Ok(config
        .parameters
        .iter()
        .enumerate()
        .map(|(i, &parameter)| SensitivityResult {
            parameter,
            baseline_value: parameter.value_in(baseline),
            points: points[i * per_parameter..(i + 1) * per_parameter].to_vec(),
        })
        .collect())
}

/// One perturbed run: snapshot, solve, reduce.
fn evaluate(
    baseline: &Parameters,
    initial: Compartments,
    t_span: [f64; 2],
    solver: &Config,
    parameter: Parameter,
    variation: f64,
) -> SweepPoint {
    let value = parameter.value_in(baseline) * (1.0 + variation);
    let params = parameter.with_value(baseline, value);

    let outcome = simulate(&params, initial, t_span, solver)
        .ok()
        .map(|solution| Metrics::from_trajectory(&solution.trajectory));

    SweepPoint {
        variation,
        value,
        outcome,
    }
}
