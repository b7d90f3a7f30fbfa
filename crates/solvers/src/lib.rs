//! Numerical solvers for Lotka models.
//!
//! # Modules
//!
//! - [`transient`] — fixed-step time integration of [`OdeProblem`]s
//!
//! [`OdeProblem`]: lotka_core::OdeProblem

pub mod transient;
