//! Core traits and types shared by the Lotka solvers and models.
//!
//! This crate defines the abstractions that solvers and models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts model inputs and outputs to an integrable state
//!   and its derivative
//! - [`StepIntegrable`] — a state that can be stepped along its derivative

mod model;
mod observer;
mod problems;
mod step;

pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
