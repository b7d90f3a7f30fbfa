use std::convert::Infallible;

use lotka_core::{DerivativeOf, Model, OdeProblem};

use crate::{Parameters, PopulationRates, Populations};

/// Model input: the populations at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub populations: Populations,
}

/// The Lotka–Volterra system as a [`Model`].
///
/// Maps a [`Sample`] to the population rates at that sample. The system is
/// autonomous, so the sample's time never affects the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotkaVolterra {
    pub parameters: Parameters,
}

impl LotkaVolterra {
    #[must_use]
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }
}

impl Model for LotkaVolterra {
    type Input = Sample;
    type Output = PopulationRates;
    type Error = Infallible;

    fn call(&self, input: &Sample) -> Result<PopulationRates, Infallible> {
        Ok(self.parameters.rates(&input.populations))
    }
}

/// Integrates the populations of a [`Sample`], advancing its time by each step.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationProblem;

impl OdeProblem for PopulationProblem {
    type Input = Sample;
    type Output = PopulationRates;
    type Delta = f64;
    type State = Populations;
    type Error = Infallible;

    fn state(&self, input: &Sample) -> Result<Populations, Infallible> {
        Ok(input.populations)
    }

    fn derivative(
        &self,
        _input: &Sample,
        output: &PopulationRates,
    ) -> Result<DerivativeOf<Populations, f64>, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &Sample,
        state: &Populations,
        delta: &f64,
    ) -> Result<Sample, Infallible> {
        Ok(Sample {
            time: base.time + delta,
            populations: *state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_does_not_change_rates() {
        let model = LotkaVolterra::new(Parameters {
            alpha: 0.66,
            beta: 1.33,
            gamma: 1.0,
            delta: 1.0,
        });
        let populations = Populations {
            prey: 0.9,
            predator: 0.9,
        };

        let early = model.call(&Sample { time: 0.0, populations }).unwrap();
        let late = model.call(&Sample { time: 1e6, populations }).unwrap();

        assert_eq!(early, late);
    }

    #[test]
    fn build_input_advances_time() {
        let base = Sample {
            time: 1.5,
            populations: Populations {
                prey: 1.0,
                predator: 1.0,
            },
        };
        let moved = Populations {
            prey: 2.0,
            predator: 3.0,
        };

        let next = PopulationProblem.build_input(&base, &moved, &0.5).unwrap();

        assert_eq!(
            next,
            Sample {
                time: 2.0,
                populations: moved,
            }
        );
    }
}
