//! Classical fourth-order Runge–Kutta solver for ODE problems.
//!
//! Each step evaluates the derivative four times and advances the state by
//! their 1:2:2:1 weighted average:
//!
//! ```text
//! k1 = f(y_n)
//! k2 = f(y_n + k1 * dt/2)
//! k3 = f(y_n + k2 * dt/2)
//! k4 = f(y_n + k3 * dt)
//!
//! y_{n+1} = y_n + (k1 + 2*k2 + 2*k3 + k4) * dt/6
//! ```
//!
//! The step size is fixed. There is no error estimate and no step rejection.
//!
//! [`integrate`] keeps only the latest snapshot and reports every accepted
//! step to an observer. [`solve`] builds on it and also retains the history.
//!
//! # Example
//!
//! ```ignore
//! use lotka_solvers::transient::rk4;
//!
//! let solution = rk4::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in &solution.history {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Outcome, Solution, Status};

use std::ops::{Add, Div, Mul};

use lotka_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Result type returned by [`solve`] for a given model and problem.
pub type SolveResult<M, P> = Result<
    Solution<<M as Model>::Input, <M as Model>::Output>,
    Error<<M as Model>::Error, <P as OdeProblem>::Error>,
>;

/// Result type returned by [`integrate`] for a given model and problem.
pub type IntegrateResult<M, P> = Result<
    Outcome<<M as Model>::Input, <M as Model>::Output>,
    Error<<M as Model>::Error, <P as OdeProblem>::Error>,
>;

/// Integrates an ODE problem using the classical RK4 method, keeping only
/// the latest snapshot.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state and the stage-one derivative from the current snapshot.
///    - Evaluate stages two and three at half a step along the previous stage.
///    - Evaluate stage four at a full step along stage three.
///    - Step the state by the weighted stage sum over `dt / 6`.
///    - Build the next input a full step past the current one and finalize it.
///    - Call the model to get the next output.
///    - Emit an `Event` to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the last snapshot reached.
///
/// The loop itself does not allocate; each snapshot moves into the event
/// for its step and then becomes the base of the next one.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial snapshot and after each
/// integration step, and may return [`Action::StopEarly`] to terminate early.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn integrate<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> IntegrateResult<M, P>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Div<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(Error::Model)?;

    let event = Event {
        step: 0,
        snapshot: Snapshot::new(initial, initial_output),
    };
    let action = observer.observe(&event);
    let mut current = event.snapshot;

    if let Some(Action::StopEarly) = action {
        return Ok(Outcome {
            status: Status::StoppedByObserver,
            steps: 0,
            last: current,
        });
    }

    let half_dt = dt.clone() / 2.0;
    let sixth_dt = dt.clone() / 6.0;

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(Error::Problem)?;
        let k1 = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::Problem)?;

        let k2 = stage(model, problem, &current.input, &state, k1.clone(), &half_dt)?;
        let k3 = stage(model, problem, &current.input, &state, k2.clone(), &half_dt)?;
        let k4 = stage(model, problem, &current.input, &state, k3.clone(), &dt)?;

        // Summed left to right so scalar fields see `k1 + 2*k2 + 2*k3 + k4`.
        let weighted = k1 + k2 * 2.0 + k3 * 2.0 + k4;
        let next_state = state.step(weighted, sixth_dt.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::Problem)?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::Problem)?;

        let next_output = model.call(&next_input).map_err(Error::Model)?;

        let event = Event {
            step,
            snapshot: Snapshot::new(next_input, next_output),
        };
        let action = observer.observe(&event);
        current = event.snapshot;

        if let Some(Action::StopEarly) = action {
            return Ok(Outcome {
                status: Status::StoppedByObserver,
                steps: step,
                last: current,
            });
        }
    }

    Ok(Outcome {
        status: Status::Complete,
        steps,
        last: current,
    })
}

/// Integrates an ODE problem using RK4 and returns every accepted snapshot.
///
/// Runs [`integrate`] and records each observed snapshot before passing the
/// event on to `observer`. The history holds the initial snapshot followed
/// by one snapshot per completed step.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    mut observer: Obs,
) -> SolveResult<M, P>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Div<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let mut history = Vec::with_capacity(steps.saturating_add(1));

    let outcome = integrate(
        model,
        problem,
        initial,
        dt,
        steps,
        |event: &Event<M::Input, M::Output>| {
            history.push(event.snapshot.clone());
            observer.observe(event)
        },
    )?;

    Ok(Solution {
        status: outcome.status,
        history,
        steps: outcome.steps,
    })
}

/// Integrates an ODE problem using RK4 without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> SolveResult<M, P>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone + Div<f64, Output = P::Delta>,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    solve(model, problem, initial, dt, steps, ())
}

/// Evaluates the derivative at `state` stepped along `slope` by `delta`.
fn stage<M, P>(
    model: &M,
    problem: &P,
    base: &M::Input,
    state: &P::State,
    slope: DerivativeOf<P::State, P::Delta>,
    delta: &P::Delta,
) -> Result<DerivativeOf<P::State, P::Delta>, Error<M::Error, P::Error>>
where
    M: Model,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
{
    let stage_state = state.step(slope, delta.clone());
    let input = problem
        .build_input(base, &stage_state, delta)
        .map_err(Error::Problem)?;
    let output = model.call(&input).map_err(Error::Model)?;
    problem
        .derivative(&input, &output)
        .map_err(Error::Problem)
}
