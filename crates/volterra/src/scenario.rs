use lotka_core::Observer;
use lotka_solvers::transient::rk4;

use crate::{Event, Parameters, Populations, Trajectory, solve_observed};

/// A complete simulation request: coefficients, starting populations, and
/// step control.
///
/// With the `serde` feature a scenario can be read from any serde format:
///
/// ```json
/// {
///   "parameters": { "alpha": 0.66, "beta": 1.33, "gamma": 1.0, "delta": 1.0 },
///   "initial": { "prey": 0.9, "predator": 0.9 },
///   "dt": 0.1,
///   "steps": 200
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub parameters: Parameters,
    pub initial: Populations,
    pub dt: f64,
    pub steps: usize,
}

impl Scenario {
    /// Integrates the scenario. See [`solve`](crate::solve).
    #[must_use]
    pub fn solve(&self) -> Trajectory {
        self.solve_observed(())
    }

    /// Integrates the scenario, reporting progress to `observer`.
    pub fn solve_observed<Obs>(&self, observer: Obs) -> Trajectory
    where
        Obs: Observer<Event, rk4::Action>,
    {
        solve_observed(self.parameters, self.initial, self.dt, self.steps, observer)
    }

    /// Checks that the scenario is physically meaningful.
    ///
    /// The integrator accepts every scenario; this is for callers that want to
    /// refuse degenerate input before running it.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: a non-finite value, a step size that
    /// is not positive, or a negative starting population.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let Parameters {
            alpha,
            beta,
            gamma,
            delta,
        } = self.parameters;
        let Populations { prey, predator } = self.initial;

        for (name, value) in [
            ("alpha", alpha),
            ("beta", beta),
            ("gamma", gamma),
            ("delta", delta),
            ("x0", prey),
            ("y0", predator),
            ("dt", self.dt),
        ] {
            if !value.is_finite() {
                return Err(ScenarioError::NonFinite { name, value });
            }
        }

        if self.dt <= 0.0 {
            return Err(ScenarioError::NonPositiveStep(self.dt));
        }

        for (name, value) in [("x0", prey), ("y0", predator)] {
            if value < 0.0 {
                return Err(ScenarioError::NegativePopulation { name, value });
            }
        }

        Ok(())
    }
}

impl Default for Scenario {
    /// The values a fresh host form starts with.
    fn default() -> Self {
        Self {
            parameters: Parameters {
                alpha: 0.66,
                beta: 1.33,
                gamma: 1.0,
                delta: 1.0,
            },
            initial: Populations {
                prey: 0.9,
                predator: 0.9,
            },
            dt: 0.1,
            steps: 200,
        }
    }
}

/// Reasons a [`Scenario`] fails [`Scenario::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("dt must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("{name} must not be negative, got {value}")]
    NegativePopulation { name: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Scenario::default().validate(), Ok(()));
    }

    #[test]
    fn default_solves_two_hundred_samples() {
        let trajectory = Scenario::default().solve();

        assert_eq!(trajectory.len(), 200);
        assert_eq!(trajectory.prey()[0], 0.9);
        assert_eq!(trajectory.first_non_finite(), None);
    }

    #[test]
    fn rejects_non_finite_values() {
        let mut scenario = Scenario::default();
        scenario.parameters.beta = f64::NAN;

        let err = scenario.validate().unwrap_err();

        assert!(matches!(err, ScenarioError::NonFinite { name: "beta", .. }));
    }

    #[test]
    fn rejects_non_positive_step() {
        let scenario = Scenario {
            dt: -0.1,
            ..Scenario::default()
        };

        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::NonPositiveStep(-0.1))
        );
        assert_eq!(
            scenario.validate().unwrap_err().to_string(),
            "dt must be positive, got -0.1"
        );
    }

    #[test]
    fn rejects_negative_population() {
        let scenario = Scenario {
            initial: Populations {
                prey: 1.0,
                predator: -2.0,
            },
            ..Scenario::default()
        };

        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::NegativePopulation {
                name: "y0",
                value: -2.0
            })
        );
    }

    #[test]
    fn invalid_scenarios_still_solve() {
        let scenario = Scenario {
            dt: -0.1,
            steps: 5,
            ..Scenario::default()
        };

        assert!(scenario.validate().is_err());
        assert_eq!(scenario.solve().len(), 5);
    }
}
