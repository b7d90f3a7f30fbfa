/// What an observer can ask of the RK4 loop once a step has been accepted.
///
/// Observers only run between full steps, so a run never ends partway
/// through the four stage evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the run after the step just reported.
    StopEarly,
}
