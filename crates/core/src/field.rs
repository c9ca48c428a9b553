/// The right-hand side of an ODE system `dy/dt = f(t, y)`.
///
/// Implementing this trait lets generic solvers integrate the system by
/// repeated evaluation. The state is a fixed-size real vector; `N` is the
/// number of state components.
///
/// Evaluation is pure and must never panic for finite input. Non-finite
/// arithmetic (a division by zero inside the field, an overflow) is not an
/// error condition here: the resulting NaN/Inf components propagate through
/// the returned derivative and are handled by the caller's policy.
pub trait VectorField<const N: usize> {
    /// Evaluates the derivative at time `t` and state `y`.
    ///
    /// `t` is part of the signature for solver compatibility even when the
    /// system is autonomous.
    fn eval(&self, t: f64, y: &[f64; N]) -> [f64; N];
}

impl<const N: usize, F> VectorField<N> for F
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    fn eval(&self, t: f64, y: &[f64; N]) -> [f64; N] {
        self(t, y)
    }
}
