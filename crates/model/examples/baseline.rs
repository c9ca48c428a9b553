//! Runs the baseline scenario and the default sensitivity sweep, printing
//! the JSON report consumed by external plotting tooling.
//!
//! A failure of the unperturbed baseline run is fatal here — there is
//! nothing meaningful to report without it. Failures confined to single
//! sweep combinations surface as missing outcomes inside the report.

use sober_model::report::Report;
use sober_model::{scenario, simulate, sweep};
use sober_solvers::transient::dormand_prince::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = scenario::baseline();
    let initial = scenario::initial_condition(&params);

    let solution = simulate(&params, initial, scenario::TIME_SPAN, &Config::default())?;
    let sensitivity = sweep::run(
        &params,
        initial,
        scenario::TIME_SPAN,
        &sweep::SweepConfig::default(),
    )?;

    let report = Report::new(&solution.trajectory, sensitivity);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
