use lotka_core::Snapshot;

/// Whether an RK4 run took every requested step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Complete,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}

/// What [`integrate`](super::integrate) reports once the loop ends.
///
/// Only the last snapshot is kept. Callers that need intermediate states
/// record them from the observed events.
#[derive(Debug, Clone)]
pub struct Outcome<I, O> {
    pub status: Status,

    /// Full steps of `dt` taken; `last` sits this many steps past the start.
    pub steps: usize,

    pub last: Snapshot<I, O>,
}

/// An RK4 run with every accepted snapshot retained.
///
/// `history[0]` is the initial snapshot and `history[n]` the state after `n`
/// full steps, so a complete run holds `steps + 1` entries.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    pub status: Status,

    pub history: Vec<Snapshot<I, O>>,

    /// Full steps of `dt` taken.
    pub steps: usize,
}
