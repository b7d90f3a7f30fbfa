//! Solvers for transient problems, which step a model forward in time.
//!
//! An [`OdeProblem`] tells a solver which part of a model input is the
//! integrated state and which part of the model output is its derivative.
//! Solvers in this module advance that state with a fixed step size.
//!
//! # Solvers
//!
//! - [`rk4`] — classical fourth-order Runge–Kutta
//!
//! [`OdeProblem`]: lotka_core::OdeProblem

pub mod rk4;
