use lotka_core::Observer;
use lotka_solvers::transient::rk4;

use crate::{
    LotkaVolterra, Parameters, PopulationProblem, PopulationRates, Populations, Sample, Trajectory,
};

/// Event emitted while integrating a predator–prey system.
pub type Event = rk4::Event<Sample, PopulationRates>;

/// Integrates the Lotka–Volterra system with `steps` fixed RK4 steps of `dt`.
///
/// Index `i` of the returned trajectory holds the state *before* step `i + 1`,
/// so index 0 is exactly `(0, x0, y0)` and the samples sit at
/// `t = 0, dt, ..., (steps - 1) * dt`. The state reached by the final step is
/// computed but not recorded. `steps == 0` yields an empty trajectory.
///
/// Every input is accepted. Negative `dt` runs time backwards, and unstable
/// parameters or degenerate populations propagate into the output as-is,
/// including as NaN or infinite values.
///
/// # Example
///
/// ```
/// let trajectory = lotka_volterra::solve(1.1, 0.4, 0.4, 0.1, 10.0, 10.0, 0.01, 3);
///
/// assert_eq!(trajectory.len(), 3);
/// assert_eq!(trajectory.prey()[0], 10.0);
/// ```
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn solve(
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    x0: f64,
    y0: f64,
    dt: f64,
    steps: usize,
) -> Trajectory {
    let parameters = Parameters {
        alpha,
        beta,
        gamma,
        delta,
    };
    let initial = Populations {
        prey: x0,
        predator: y0,
    };
    solve_observed(parameters, initial, dt, steps, ())
}

/// Integrates like [`solve`], reporting every step to `observer`.
///
/// The observer sees the initial sample as step 0 and the sample after each
/// step as steps `1..=steps`. Returning [`rk4::Action::StopEarly`] ends the
/// run; the trajectory then holds the samples observed so far, capped at
/// `steps`.
pub fn solve_observed<Obs>(
    parameters: Parameters,
    initial: Populations,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Trajectory
where
    Obs: Observer<Event, rk4::Action>,
{
    let model = LotkaVolterra::new(parameters);
    let start = Sample {
        time: 0.0,
        populations: initial,
    };

    let mut trajectory = Trajectory::with_capacity(steps);
    let recorder = |event: &Event| {
        // The state after the last step is never stored.
        if event.step < steps {
            trajectory.push(&event.snapshot.input);
        }
        observer.observe(event)
    };

    match rk4::integrate(&model, &PopulationProblem, start, dt, steps, recorder) {
        Ok(_) => trajectory,
        Err(rk4::Error::Model(never) | rk4::Error::Problem(never)) => match never {},
    }
}
