//! Core traits and types for the sober simulation workspace.
//!
//! This crate defines the shared abstractions that solvers and models build
//! on:
//!
//! - [`VectorField`] — the right-hand side of an autonomous-or-not ODE
//!   system, `dy/dt = f(t, y)` over a fixed-size real state
//! - [`Trajectory`] — a time-ordered sequence of (time, state) samples
//!   produced by one solve
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod field;
mod observer;
mod trajectory;

pub use field::VectorField;
pub use observer::Observer;
pub use trajectory::Trajectory;
