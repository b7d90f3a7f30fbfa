use std::ops::{Add, Mul};

use lotka_core::StepIntegrable;

/// Coefficients of the Lotka–Volterra system.
///
/// ```text
/// dx/dt = alpha*x - beta*x*y
/// dy/dt = delta*x*y - gamma*y
/// ```
///
/// where `x` is the prey population and `y` the predator population.
/// No value is validated; see [`Scenario::validate`](crate::Scenario::validate)
/// for an opt-in check.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Prey intrinsic growth rate.
    pub alpha: f64,
    /// Prey lost per predator encounter.
    pub beta: f64,
    /// Predator intrinsic death rate.
    pub gamma: f64,
    /// Predator growth per prey consumed.
    pub delta: f64,
}

impl Parameters {
    /// Rate of change of the prey population, `alpha*x - beta*x*y`.
    #[must_use]
    pub fn prey_rate(&self, prey: f64, predator: f64) -> f64 {
        self.alpha * prey - self.beta * prey * predator
    }

    /// Rate of change of the predator population, `delta*x*y - gamma*y`.
    #[must_use]
    pub fn predator_rate(&self, prey: f64, predator: f64) -> f64 {
        self.delta * prey * predator - self.gamma * predator
    }

    /// Rates of change of both populations.
    #[must_use]
    pub fn rates(&self, populations: &Populations) -> PopulationRates {
        let Populations { prey, predator } = *populations;
        PopulationRates {
            prey: self.prey_rate(prey, predator),
            predator: self.predator_rate(prey, predator),
        }
    }

    /// The nontrivial fixed point, `(gamma/delta, alpha/beta)`.
    ///
    /// Only meaningful when both coordinates are finite and positive.
    #[must_use]
    pub fn equilibrium(&self) -> Populations {
        Populations {
            prey: self.gamma / self.delta,
            predator: self.alpha / self.beta,
        }
    }
}

/// Prey and predator populations at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Populations {
    pub prey: f64,
    pub predator: f64,
}

/// Time derivative of [`Populations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationRates {
    pub prey: f64,
    pub predator: f64,
}

impl Add for PopulationRates {
    type Output = PopulationRates;

    fn add(self, rhs: PopulationRates) -> PopulationRates {
        PopulationRates {
            prey: self.prey + rhs.prey,
            predator: self.predator + rhs.predator,
        }
    }
}

impl Mul<f64> for PopulationRates {
    type Output = PopulationRates;

    fn mul(self, rhs: f64) -> PopulationRates {
        PopulationRates {
            prey: self.prey * rhs,
            predator: self.predator * rhs,
        }
    }
}

impl StepIntegrable<f64> for Populations {
    type Derivative = PopulationRates;

    fn step(&self, derivative: PopulationRates, dt: f64) -> Self {
        Populations {
            prey: self.prey + derivative.prey * dt,
            predator: self.predator + derivative.predator * dt,
        }
    }
}
