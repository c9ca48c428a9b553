use thiserror::Error;

/// Configuration for the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    rel_tol: f64,
    abs_tol: f64,
    max_step: Option<f64>,
    max_steps: usize,
}

/// Errors that can occur when validating a Dormand–Prince solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rel_tol must be finite and positive")]
    RelTol,

    #[error("abs_tol must be finite and positive")]
    AbsTol,

    #[error("max_step must be finite and positive")]
    MaxStep,

    #[error("max_steps must be positive")]
    MaxSteps,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-3, 1e-6, None, 100_000).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances and step limits.
    ///
    /// `max_step` bounds the size of a single step; `None` leaves steps
    /// bounded only by the remaining span. `max_steps` bounds the total
    /// number of step attempts (accepted plus rejected) in one solve.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance or `max_step` is non-positive or
    /// non-finite, or if `max_steps` is zero.
    pub fn new(
        rel_tol: f64,
        abs_tol: f64,
        max_step: Option<f64>,
        max_steps: usize,
    ) -> Result<Self, ConfigError> {
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(ConfigError::RelTol);
        }
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if let Some(h) = max_step {
            if !h.is_finite() || h <= 0.0 {
                return Err(ConfigError::MaxStep);
            }
        }
        if max_steps == 0 {
            return Err(ConfigError::MaxSteps);
        }

        Ok(Self {
            rel_tol,
            abs_tol,
            max_step,
            max_steps,
        })
    }

    /// Creates a config with the given tolerances and default step limits.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is non-positive or non-finite.
    pub fn with_tolerances(rel_tol: f64, abs_tol: f64) -> Result<Self, ConfigError> {
        Self::new(rel_tol, abs_tol, None, 100_000)
    }

    /// Returns the relative error tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the absolute error tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the maximum step size, if bounded.
    #[must_use]
    pub fn max_step(&self) -> Option<f64> {
        self.max_step
    }

    /// Returns the maximum number of step attempts.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}
