/// A state that can be advanced along its derivative.
///
/// `step` returns `self + derivative * delta`. Solvers build every stage of a
/// step out of this one operation, so an implementation should evaluate it
/// field by field in exactly that form.
///
/// `Delta` is the independent variable, usually time as a plain `f64`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
