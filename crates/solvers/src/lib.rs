//! Numerical solvers for the sober simulation workspace.
//!
//! Solvers are generic over the abstractions in [`sober_core`]: they
//! integrate any [`VectorField`](sober_core::VectorField) and report
//! progress through [`Observer`](sober_core::Observer) events.

pub mod transient;
