//! Adaptive Dormand–Prince 4(5) solver for transient problems.
//!
//! This module integrates a [`VectorField`] over a closed time interval
//! using the embedded explicit Runge–Kutta pair of Dormand and Prince with
//! automatic step-size control.
//!
//! # Algorithm
//!
//! 1. Evaluate the derivative at the current state (reused from the
//!    previous step's last stage — FSAL).
//! 2. Compute the six remaining stages and form the 5th-order candidate
//!    state and the embedded 4th/5th-order error estimate.
//! 3. Accept the step if the tolerance-scaled RMS error norm is at most 1,
//!    otherwise reject it; either way rescale the step size by the standard
//!    safety-factor heuristic `0.9 · err^(-1/5)`, clamped to [0.2, 5].
//! 4. Clamp the last step so the final sample lands on the end of the span
//!    exactly.
//!
//! # Degenerate input
//!
//! A non-finite initial state, or an initial state at which the field
//! returns a non-finite derivative (for population models, a zero total
//! population), makes error control meaningless. The solver does not guess:
//! it records the initial sample, fills the end of the span with the
//! non-finite data (NaN when the state itself is still finite), and
//! terminates with [`Status::Complete`]. Downstream metric extraction sees
//! NaN rather than a crash. Non-finite values arising only inside *trial*
//! stages are treated as a rejected step at maximum shrink, which can end
//! in [`Error::StepSizeUnderflow`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per trajectory sample: step 0 for the
//! initial state, then one per accepted step. Observers can return
//! [`Action::StopEarly`] to halt and keep the partial trajectory.
//!
//! # Errors
//!
//! A non-increasing or non-finite time span fails immediately with
//! [`Error::InvalidTimeSpan`]. During integration the only failures are
//! non-convergence: [`Error::StepSizeUnderflow`] when the required step
//! collapses below a minimum threshold, and [`Error::MaxSteps`] when the
//! step budget is exhausted before reaching the end of the span.

mod action;
mod config;
mod error;
mod event;
mod solution;
mod tableau;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::array::from_fn;

use sober_core::{Observer, Trajectory, VectorField};

/// Safety factor applied to the error-based step rescale.
const SAFETY: f64 = 0.9;

/// Smallest allowed step rescale factor.
const SHRINK_MIN: f64 = 0.2;

/// Largest allowed step rescale factor.
const GROW_MAX: f64 = 5.0;

/// First step size as a fraction of the span.
const INITIAL_STEP_FRACTION: f64 = 1e-3;

/// Step underflow threshold as a fraction of the span.
const MIN_STEP_FRACTION: f64 = 1e-14;

/// Integrates a vector field over `t_span` from `initial`.
///
/// The observer receives an [`Event`] per trajectory sample. See the
/// [module docs](self) for the algorithm, event timing, and the degenerate
/// input policy.
///
/// # Errors
///
/// Returns [`Error::InvalidTimeSpan`] for a non-finite or non-increasing
/// span, and a non-convergence error ([`Error::StepSizeUnderflow`] or
/// [`Error::MaxSteps`]) if adaptive stepping cannot reach the end of the
/// span.
pub fn solve<const N: usize, F, Obs>(
    field: &F,
    t_span: [f64; 2],
    initial: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: VectorField<N>,
    Obs: Observer<Event<N>, Action>,
{
    let [t0, tf] = t_span;
    if !t0.is_finite() || !tf.is_finite() || t0 >= tf {
        return Err(Error::InvalidTimeSpan { start: t0, end: tf });
    }

    let span = tf - t0;
    let min_step = span * MIN_STEP_FRACTION;

    let mut trajectory = Trajectory::with_capacity(64);
    trajectory.push(t0, initial);

    let event = Event {
        step: 0,
        t: t0,
        h: 0.0,
        state: initial,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(finished(Status::StoppedByObserver, trajectory, 0, 0));
    }

    let mut y = initial;
    let mut k1 = field.eval(t0, &y);

    // Degenerate input: carry the unusable data to the end of the span.
    if !all_finite(&y) {
        trajectory.push(tf, y);
        return Ok(finished(Status::Complete, trajectory, 0, 0));
    }
    if !all_finite(&k1) {
        trajectory.push(tf, [f64::NAN; N]);
        return Ok(finished(Status::Complete, trajectory, 0, 0));
    }

    let mut t = t0;
    let mut h = initial_step(span, config);
    let mut accepted = 0;
    let mut rejected = 0;

    loop {
        if accepted + rejected >= config.max_steps() {
            return Err(Error::MaxSteps {
                t,
                max_steps: config.max_steps(),
            });
        }

        // Clamp the last step so the final sample lands on tf exactly; the
        // second condition catches a step that would only round onto tf.
        let remaining = tf - t;
        let final_step = h >= remaining || t + h >= tf;
        if final_step {
            h = remaining;
        }

        let attempt = attempt_step(field, t, &y, &k1, h, config);

        if attempt.err_norm.is_finite() && attempt.err_norm <= 1.0 {
            t = if final_step { tf } else { t + h };
            y = attempt.y_new;
            k1 = attempt.k_last;
            accepted += 1;
            trajectory.push(t, y);

            let event = Event {
                step: accepted,
                t,
                h,
                state: y,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(finished(
                    Status::StoppedByObserver,
                    trajectory,
                    accepted,
                    rejected,
                ));
            }

            if final_step {
                return Ok(finished(Status::Complete, trajectory, accepted, rejected));
            }
        } else {
            rejected += 1;
        }

        let factor = if !attempt.err_norm.is_finite() {
            SHRINK_MIN
        } else if attempt.err_norm == 0.0 {
            GROW_MAX
        } else {
            (SAFETY * attempt.err_norm.powf(-0.2)).clamp(SHRINK_MIN, GROW_MAX)
        };
        h *= factor;
        if let Some(max) = config.max_step() {
            h = h.min(max);
        }
        if h < min_step {
            return Err(Error::StepSizeUnderflow { t, step: h });
        }
    }
}

/// Integrates a vector field without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<const N: usize, F>(
    field: &F,
    t_span: [f64; 2],
    initial: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    F: VectorField<N>,
{
    solve(field, t_span, initial, config, ())
}

/// One trial step: the 5th-order candidate, its trailing stage, and the
/// tolerance-scaled RMS error norm.
struct Attempt<const N: usize> {
    y_new: [f64; N],
    k_last: [f64; N],
    err_norm: f64,
}

fn attempt_step<const N: usize, F>(
    field: &F,
    t: f64,
    y: &[f64; N],
    k1: &[f64; N],
    h: f64,
    config: &Config,
) -> Attempt<N>
where
    F: VectorField<N>,
{
    use self::tableau::{
        A21, A31, A32, A41, A42, A43, A51, A52, A53, A54, A61, A62, A63, A64, A65, BH1, BH3, BH4,
        BH5, BH6, C2, C3, C4, C5, E1, E3, E4, E5, E6, E7,
    };

    let y2: [f64; N] = from_fn(|i| y[i] + h * A21 * k1[i]);
    let k2 = field.eval(t + C2 * h, &y2);

    let y3: [f64; N] = from_fn(|i| y[i] + h * (A31 * k1[i] + A32 * k2[i]));
    let k3 = field.eval(t + C3 * h, &y3);

    let y4: [f64; N] = from_fn(|i| y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]));
    let k4 = field.eval(t + C4 * h, &y4);

    let y5: [f64; N] =
        from_fn(|i| y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]));
    let k5 = field.eval(t + C5 * h, &y5);

    let y6: [f64; N] = from_fn(|i| {
        y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i])
    });
    let k6 = field.eval(t + h, &y6);

    let y_new: [f64; N] = from_fn(|i| {
        y[i] + h * (BH1 * k1[i] + BH3 * k3[i] + BH4 * k4[i] + BH5 * k5[i] + BH6 * k6[i])
    });
    let k_last = field.eval(t + h, &y_new);

    let mut err_sq = 0.0;
    for i in 0..N {
        let e = h
            * (E1 * k1[i] + E3 * k3[i] + E4 * k4[i] + E5 * k5[i] + E6 * k6[i] + E7 * k_last[i]);
        let sc = config.abs_tol() + config.rel_tol() * y[i].abs().max(y_new[i].abs());
        err_sq += (e / sc) * (e / sc);
    }

    Attempt {
        y_new,
        k_last,
        err_norm: (err_sq / N as f64).sqrt(),
    }
}

fn initial_step(span: f64, config: &Config) -> f64 {
    let h0 = span * INITIAL_STEP_FRACTION;
    match config.max_step() {
        Some(max) => h0.min(max),
        None => h0,
    }
}

fn all_finite<const N: usize>(values: &[f64; N]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn finished<const N: usize>(
    status: Status,
    trajectory: Trajectory<N>,
    accepted_steps: usize,
    rejected_steps: usize,
) -> Solution<N> {
    Solution {
        status,
        trajectory,
        accepted_steps,
        rejected_steps,
    }
}
