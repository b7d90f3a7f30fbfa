use crate::{DerivativeOf, StepIntegrable};

/// Describes how a solver integrates a [`Model`](crate::Model) over time.
///
/// The model itself only knows how to map an input to an output. An ODE
/// problem supplies the rest of the picture: which part of the input is the
/// integrated state, which part of the output is that state's derivative, and
/// how to rebuild a full model input once the state has been moved.
///
/// Multi-stage solvers call [`build_input`](OdeProblem::build_input) for every
/// intermediate stage, not just for accepted steps, so it must not assume the
/// state it receives will be kept.
pub trait OdeProblem {
    type Input;
    type Output;
    type Delta;
    type State: StepIntegrable<Self::Delta>;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the integrated state from a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be extracted from the input.
    fn state(&self, input: &Self::Input) -> Result<Self::State, Self::Error>;

    /// Computes the derivative of the state from model input and output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<DerivativeOf<Self::State, Self::Delta>, Self::Error>;

    /// Builds the model input for `state`, located `delta` past `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from the state.
    fn build_input(
        &self,
        base: &Self::Input,
        state: &Self::State,
        delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error>;

    /// Adjusts the input produced by an accepted step.
    ///
    /// Called once per accepted step, after every stage has been evaluated and
    /// before the model is called at the new input. The default implementation
    /// returns the input unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if finalization fails.
    fn finalize_step(
        &self,
        next_input: Self::Input,
        _prev_input: &Self::Input,
        _prev_output: &Self::Output,
        _step_delta: &Self::Delta,
    ) -> Result<Self::Input, Self::Error> {
        Ok(next_input)
    }
}
