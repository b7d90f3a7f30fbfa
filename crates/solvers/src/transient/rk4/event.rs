use lotka_core::Snapshot;

/// One accepted RK4 step, handed to the observer.
///
/// `step` counts full steps of `dt` taken so far, so the initial snapshot
/// arrives as step 0. The four stage evaluations inside a step are not
/// reported; only the state reached after the weighted update is.
#[derive(Debug, Clone)]
pub struct Event<I, O> {
    pub step: usize,

    /// Model input and output after `step` full steps.
    pub snapshot: Snapshot<I, O>,
}
