//! Whole-system tests: the baseline scenario, the sensitivity sweep, and
//! their interaction with the adaptive solver.

use approx::assert_relative_eq;

use sober_model::{
    Compartments, Metrics, Parameter, Parameters, scenario, simulate,
    sweep::{self, SweepConfig},
};
use sober_solvers::transient::dormand_prince::Config;

/// A small, non-stiff parameter set for tests that do not need the
/// published scenario values.
fn quick() -> Parameters {
    Parameters {
        lambda: 100.0,
        mu: 0.1,
        delta1: 0.02,
        delta2: 0.01,
        beta1: 0.3,
        alpha: 0.2,
        gamma: 0.8,
        sigma: 0.4,
        eta: 0.05,
    }
}

fn baseline_metrics() -> Metrics {
    let params = scenario::baseline();
    let initial = scenario::initial_condition(&params);
    let solution = simulate(&params, initial, scenario::TIME_SPAN, &Config::default()).unwrap();
    Metrics::from_trajectory(&solution.trajectory)
}

#[test]
fn baseline_run_has_the_expected_shape() {
    let params = scenario::baseline();
    let initial = scenario::initial_condition(&params);

    let solution = simulate(&params, initial, scenario::TIME_SPAN, &Config::default()).unwrap();
    let trajectory = &solution.trajectory;

    // Trajectory invariants: starts at the initial condition, strictly
    // increasing times, ends exactly at the configured horizon.
    let initial_state: [f64; 4] = initial.into();
    assert_eq!(trajectory.first(), Some((0.0, &initial_state)));
    assert!(trajectory.times().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(*trajectory.times().last().unwrap(), scenario::TIME_SPAN[1]);

    // Heavy drinkers spike well above the single seeded case, then the
    // treatment-dominated outflow drives them to a small quasi-steady
    // level.
    let metrics = Metrics::from_trajectory(trajectory);
    let end = Compartments::from(*trajectory.final_state().unwrap());

    assert!(metrics.peak_heavy > 1e3);
    assert!(end.heavy > 0.0);
    assert!(end.heavy < 0.2 * metrics.peak_heavy);

    // Treatment and recovered populations grow from empty.
    assert!(end.treatment > 0.0);
    assert!(end.recovered > 0.0);
    assert!(metrics.is_finite());
}

#[test]
fn zero_variation_rows_match_the_baseline_run() {
    let params = scenario::baseline();
    let initial = scenario::initial_condition(&params);
    let expected = baseline_metrics();

    let results = sweep::run(
        &params,
        initial,
        scenario::TIME_SPAN,
        &SweepConfig::default(),
    )
    .unwrap();

    assert_eq!(results.len(), scenario::SWEPT_PARAMETERS.len());
    for result in &results {
        let point = result
            .points
            .iter()
            .find(|p| p.variation == 0.0)
            .expect("variation grid includes zero");
        let metrics = point.outcome.expect("baseline-valued run converges");

        assert_relative_eq!(metrics.peak_heavy, expected.peak_heavy, max_relative = 1e-6);
        assert_relative_eq!(
            metrics.final_recovered,
            expected.final_recovered,
            max_relative = 1e-6
        );
    }
}

#[test]
fn sweep_is_deterministic() {
    let params = scenario::baseline();
    let initial = scenario::initial_condition(&params);
    let config = SweepConfig {
        parameters: vec![Parameter::Beta1, Parameter::Alpha],
        variations: vec![-0.2, 0.0, 0.2],
        solver: Config::default(),
    };

    let first = sweep::run(&params, initial, scenario::TIME_SPAN, &config).unwrap();
    let second = sweep::run(&params, initial, scenario::TIME_SPAN, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn sweeping_never_disturbs_the_baseline_set() {
    let params = scenario::baseline();
    let snapshot = params;
    let initial = scenario::initial_condition(&params);

    sweep::run(
        &params,
        initial,
        scenario::TIME_SPAN,
        &SweepConfig::default(),
    )
    .unwrap();

    assert_eq!(params, snapshot);
}

#[test]
fn alpha_zero_matches_a_high_precision_reference() {
    // With the social-influence feedback disabled the system is smooth and
    // non-stiff for the quick parameter set; a default-tolerance run must
    // track a much tighter reference solve.
    let params = Parameter::Alpha.with_value(&quick(), 0.0);
    let initial = Compartments {
        moderate: params.lambda / params.mu,
        heavy: 10.0,
        treatment: 0.0,
        recovered: 0.0,
    };
    let t_span = [0.0, 50.0];

    let loose = simulate(&params, initial, t_span, &Config::default()).unwrap();
    let reference = simulate(
        &params,
        initial,
        t_span,
        &Config::with_tolerances(1e-9, 1e-12).unwrap(),
    )
    .unwrap();

    let loose_end = loose.trajectory.final_state().unwrap();
    let reference_end = reference.trajectory.final_state().unwrap();
    for (a, b) in loose_end.iter().zip(reference_end) {
        assert_relative_eq!(*a, *b, max_relative = 1e-2, epsilon = 1e-6);
    }
}

#[test]
fn zero_population_surfaces_nan_metrics() {
    let params = scenario::baseline();
    let empty = Compartments {
        moderate: 0.0,
        heavy: 0.0,
        treatment: 0.0,
        recovered: 0.0,
    };

    let solution = simulate(&params, empty, scenario::TIME_SPAN, &Config::default()).unwrap();
    let metrics = Metrics::from_trajectory(&solution.trajectory);

    assert_eq!(
        *solution.trajectory.times().last().unwrap(),
        scenario::TIME_SPAN[1]
    );
    assert!(metrics.peak_heavy.is_nan());
    assert!(metrics.final_recovered.is_nan());
}

#[test]
fn perturbations_move_the_metrics_the_expected_way() {
    // More treatment entry (gamma up) routes more people through T into R,
    // so the final recovered count must grow with gamma.
    let params = quick();
    let initial = Compartments {
        moderate: 1000.0,
        heavy: 10.0,
        treatment: 0.0,
        recovered: 0.0,
    };
    let config = SweepConfig {
        parameters: vec![Parameter::Gamma],
        variations: vec![-0.3, 0.0, 0.3],
        solver: Config::default(),
    };

    let results = sweep::run(&params, initial, [0.0, 40.0], &config).unwrap();
    let points = &results[0].points;

    let low = points[0].outcome.unwrap();
    let high = points[2].outcome.unwrap();

    assert!(high.final_recovered > low.final_recovered);
}
