//! Predator–prey trajectories of the Lotka–Volterra system.
//!
//! [`solve`] takes the four coefficients, the starting prey and predator
//! populations, a step size, and a step count, and integrates the system with
//! fixed-step classical RK4:
//!
//! ```
//! let trajectory = lotka_volterra::solve(0.66, 1.33, 1.0, 1.0, 0.9, 0.9, 0.1, 200);
//!
//! for point in trajectory.preview(5) {
//!     println!("{point}");
//! }
//! ```
//!
//! The same integration is available as a [`Scenario`] (loadable from config
//! with the `serde` feature), with an observer for progress and cancellation
//! ([`solve_observed`]), and keyed for a host UI through [`bridge`].
//!
//! # Features
//!
//! - `serde` (default) — `Serialize`/`Deserialize` for scenarios and series,
//!   and JSON helpers on [`bridge::Series`].

pub mod bridge;

mod model;
mod parameters;
mod scenario;
mod solve;
mod trajectory;

pub use model::{LotkaVolterra, PopulationProblem, Sample};
pub use parameters::{Parameters, PopulationRates, Populations};
pub use scenario::{Scenario, ScenarioError};
pub use solve::{Event, solve, solve_observed};
pub use trajectory::{Point, Trajectory};

pub use lotka_solvers::transient::rk4::Action;
