use std::error::Error as StdError;

/// Errors that can occur during RK4 integration.
///
/// The error is generic over the model error `ME` and the problem error `PE`.
/// When both are uninhabited (for example [`std::convert::Infallible`]), so is
/// this type, and callers can match it away without a panic path.
#[derive(Debug, thiserror::Error)]
pub enum Error<ME, PE>
where
    ME: StdError + 'static,
    PE: StdError + 'static,
{
    #[error("model error: {0}")]
    Model(#[source] ME),

    #[error("problem error: {0}")]
    Problem(#[source] PE),
}
