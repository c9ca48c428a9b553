use approx::assert_relative_eq;

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

/// Exponential decay: dy/dt = -k·y, with closed form y0·exp(-k·t).
fn decay(k: f64) -> impl Fn(f64, &[f64; 1]) -> [f64; 1] {
    move |_t, y| [-k * y[0]]
}

/// Planar rotation: dx/dt = -y, dy/dt = x. Orbits the unit circle.
fn rotation(_t: f64, y: &[f64; 2]) -> [f64; 2] {
    [-y[1], y[0]]
}

fn tight() -> Config {
    Config::with_tolerances(1e-9, 1e-12).unwrap()
}

#[test]
fn matches_exponential_decay() {
    let solution = solve_unobserved(&decay(0.7), [0.0, 3.0], [2.0], &tight()).unwrap();

    let (t_final, state) = solution.trajectory.last().unwrap();
    assert_eq!(t_final, 3.0);
    assert_relative_eq!(state[0], 2.0 * (-2.1_f64).exp(), max_relative = 1e-7);
}

#[test]
fn default_tolerances_stay_close_to_closed_form() {
    let solution =
        solve_unobserved(&decay(0.7), [0.0, 3.0], [2.0], &Config::default()).unwrap();

    let state = solution.trajectory.final_state().unwrap();
    assert_relative_eq!(state[0], 2.0 * (-2.1_f64).exp(), max_relative = 1e-3);
}

#[test]
fn orbits_the_unit_circle() {
    let solution =
        solve_unobserved(&rotation, [0.0, std::f64::consts::TAU], [1.0, 0.0], &tight()).unwrap();

    let state = solution.trajectory.final_state().unwrap();
    assert_relative_eq!(state[0].hypot(state[1]), 1.0, epsilon = 1e-6);
    assert_relative_eq!(state[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(state[1], 0.0, epsilon = 1e-5);
}

#[test]
fn sample_times_are_strictly_increasing_and_end_exactly() {
    let solution =
        solve_unobserved(&decay(1.0), [0.0, 5.0], [1.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Complete);

    let times = solution.trajectory.times();
    assert_eq!(times[0], 0.0);
    assert_eq!(*times.last().unwrap(), 5.0);
    assert!(times.windows(2).all(|w| w[0] < w[1]));

    assert_eq!(solution.trajectory.first(), Some((0.0, &[1.0])));
    assert_eq!(solution.accepted_steps + 1, solution.trajectory.len());
}

#[test]
fn zero_field_leaves_state_unchanged() {
    let field = |_t: f64, _y: &[f64; 3]| [0.0; 3];
    let solution =
        solve_unobserved(&field, [0.0, 10.0], [1.0, -2.0, 0.5], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.rejected_steps, 0);
    assert_eq!(solution.trajectory.final_state(), Some(&[1.0, -2.0, 0.5]));
}

#[test]
fn max_step_bounds_every_step() {
    let config = Config::new(1e-3, 1e-6, Some(0.01), 100_000).unwrap();
    let solution = solve_unobserved(&decay(1.0), [0.0, 1.0], [1.0], &config).unwrap();

    let times = solution.trajectory.times();
    assert!(times.windows(2).all(|w| w[1] - w[0] <= 0.01 + 1e-12));
    assert!(solution.accepted_steps >= 100);
}

#[test]
fn rejects_invalid_time_spans() {
    let config = Config::default();

    for t_span in [[1.0, 1.0], [2.0, 1.0], [f64::NAN, 1.0], [0.0, f64::INFINITY]] {
        let result = solve_unobserved(&decay(1.0), t_span, [1.0], &config);
        assert!(matches!(result, Err(Error::InvalidTimeSpan { .. })));
    }
}

#[test]
fn finite_time_blowup_fails_to_converge() {
    // dy/dt = y² blows up at t = 1; integrating past it must fail rather
    // than loop forever.
    let field = |_t: f64, y: &[f64; 1]| [y[0] * y[0]];
    let result = solve_unobserved(&field, [0.0, 2.0], [1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::StepSizeUnderflow { .. } | Error::MaxSteps { .. })
    ));
}

#[test]
fn exhausted_step_budget_is_an_error() {
    let config = Config::new(1e-9, 1e-12, Some(1e-4), 10).unwrap();
    let result = solve_unobserved(&decay(1.0), [0.0, 1.0], [1.0], &config);

    assert!(matches!(result, Err(Error::MaxSteps { max_steps: 10, .. })));
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<1>| {
        if event.step >= 3 {
            Some(Action::StopEarly)
        } else {
            None
        }
    };

    let solution =
        solve(&decay(1.0), [0.0, 5.0], [1.0], &Config::default(), observer).unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.accepted_steps, 3);
    assert_eq!(solution.trajectory.len(), 4);
    assert!(*solution.trajectory.times().last().unwrap() < 5.0);
}

#[test]
fn step_numbers_start_at_zero() {
    let mut steps = Vec::new();
    let observer = |event: &Event<1>| {
        steps.push(event.step);
        None
    };

    solve(&decay(1.0), [0.0, 0.1], [1.0], &Config::default(), observer).unwrap();

    assert_eq!(steps[0], 0);
    assert!(steps.windows(2).all(|w| w[1] == w[0] + 1));
}

#[test]
fn degenerate_initial_derivative_completes_with_nan() {
    // Field divides by the component sum; a zero start makes the very first
    // derivative non-finite.
    let field = |_t: f64, y: &[f64; 2]| [1.0 / (y[0] + y[1]), 0.0];
    let solution = solve_unobserved(&field, [0.0, 4.0], [0.0, 0.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trajectory.len(), 2);
    assert_eq!(solution.trajectory.first(), Some((0.0, &[0.0, 0.0])));

    let (t_final, state) = solution.trajectory.last().unwrap();
    assert_eq!(t_final, 4.0);
    assert!(state.iter().all(|v| v.is_nan()));
}

#[test]
fn non_finite_initial_state_is_carried_to_the_end() {
    let solution =
        solve_unobserved(&decay(1.0), [0.0, 2.0], [f64::NAN], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.trajectory.len(), 2);

    let (t_final, state) = solution.trajectory.last().unwrap();
    assert_eq!(t_final, 2.0);
    assert!(state[0].is_nan());
}
