use thiserror::Error;

/// Errors that can occur during an adaptive integration.
///
/// [`Error::StepSizeUnderflow`] and [`Error::MaxSteps`] are both
/// non-convergence failures: the step controller could not carry the state
/// to the end of the span within its budget.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid time span: start {start} must be finite and strictly less than end {end}")]
    InvalidTimeSpan { start: f64, end: f64 },

    #[error("step size underflowed to {step:.3e} at t = {t}")]
    StepSizeUnderflow { t: f64, step: f64 },

    #[error("step budget of {max_steps} exhausted at t = {t}")]
    MaxSteps { t: f64, max_steps: usize },
}
