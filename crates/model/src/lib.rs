//! Four-compartment alcohol-use dynamics: the model, its baseline scenario,
//! and parameter sensitivity analysis.
//!
//! The model tracks moderate drinkers, heavy drinkers, people in treatment,
//! and recovered people. The moderate-to-heavy transition rate grows with
//! the current heavy-drinker fraction — a social-influence feedback — while
//! recruitment, deaths, treatment entry, recovery, and relapse move people
//! between compartments.
//!
//! [`simulate`] integrates the model with the adaptive solver from
//! [`sober_solvers`]; [`sweep::run`] measures how the peak heavy-drinker
//! count and the final recovered count respond to one-at-a-time parameter
//! perturbations; [`report::Report`] packages both outputs for external
//! visualization tooling.
//!
//! ```
//! use sober_model::{scenario, simulate};
//! use sober_solvers::transient::dormand_prince::Config;
//!
//! let params = scenario::baseline();
//! let initial = scenario::initial_condition(&params);
//!
//! let solution = simulate(&params, initial, scenario::TIME_SPAN, &Config::default())?;
//! assert_eq!(*solution.trajectory.times().last().unwrap(), scenario::TIME_SPAN[1]);
//! # Ok::<(), sober_model::SimulateError>(())
//! ```

mod compartments;
mod dynamics;
mod metrics;
mod params;

pub mod report;
pub mod scenario;
pub mod sweep;

pub use compartments::Compartments;
pub use dynamics::{DrinkingDynamics, SimulateError, simulate};
pub use metrics::Metrics;
pub use params::{Parameter, ParameterError, Parameters};
