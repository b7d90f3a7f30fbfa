//! Hands trajectories to a host UI in the keyed form its plotting code reads.
//!
//! The host passes plain scalars (or the raw text of its input fields), the
//! integrator runs once per request, and the result comes back as a
//! [`Series`]: three named, index-aligned arrays under [`TIME_KEY`],
//! [`PREY_KEY`], and [`PREDATOR_KEY`]. Nothing here does any numerics.

use std::collections::BTreeMap;

use crate::{Scenario, Trajectory, solve};

pub const TIME_KEY: &str = "t";
pub const PREY_KEY: &str = "prey";
pub const PREDATOR_KEY: &str = "predator";

/// Named numeric arrays, keyed by [`TIME_KEY`], [`PREY_KEY`], and
/// [`PREDATOR_KEY`].
///
/// Serializes as a plain map, e.g. `{"predator":[..],"prey":[..],"t":[..]}`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Series(BTreeMap<String, Vec<f64>>);

impl Series {
    /// The array stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of rows a host can read: the shortest of the three arrays, or
    /// zero if any of them is missing.
    #[must_use]
    pub fn aligned_len(&self) -> usize {
        [TIME_KEY, PREY_KEY, PREDATOR_KEY]
            .iter()
            .map(|key| self.get(key).map_or(0, <[f64]>::len))
            .min()
            .unwrap_or(0)
    }

    /// Serializes the series as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a series from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not an object of numeric arrays.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<Trajectory> for Series {
    fn from(trajectory: Trajectory) -> Self {
        let (time, prey, predator) = trajectory.into_parts();
        Self(BTreeMap::from([
            (TIME_KEY.to_owned(), time),
            (PREY_KEY.to_owned(), prey),
            (PREDATOR_KEY.to_owned(), predator),
        ]))
    }
}

/// Runs the integrator once and returns its output keyed for the host.
///
/// `steps` arrives as the host's signed integer; negative counts produce empty
/// arrays, like zero.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn solve_series(
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    x0: f64,
    y0: f64,
    dt: f64,
    steps: i32,
) -> Series {
    let steps = usize::try_from(steps).unwrap_or(0);
    Series::from(solve(alpha, beta, gamma, delta, x0, y0, dt, steps))
}

/// The raw text of a host's input form.
///
/// Each field that fails to parse falls back to its [`Scenario::default`]
/// value, independently of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct HostForm {
    pub alpha: String,
    pub beta: String,
    pub gamma: String,
    pub delta: String,
    pub x0: String,
    pub y0: String,
    pub dt: String,
    pub steps: String,
}

impl HostForm {
    /// Parses every field and runs the integrator once.
    #[must_use]
    pub fn solve(&self) -> Series {
        let defaults = Scenario::default();
        let real = |text: &str, default: f64| text.parse::<f64>().unwrap_or(default);
        let steps = self.steps.parse::<i32>().unwrap_or_else(|_| {
            i32::try_from(defaults.steps).unwrap_or(i32::MAX)
        });

        solve_series(
            real(&self.alpha, defaults.parameters.alpha),
            real(&self.beta, defaults.parameters.beta),
            real(&self.gamma, defaults.parameters.gamma),
            real(&self.delta, defaults.parameters.delta),
            real(&self.x0, defaults.initial.prey),
            real(&self.y0, defaults.initial.predator),
            real(&self.dt, defaults.dt),
            steps,
        )
    }
}

impl Default for HostForm {
    fn default() -> Self {
        let Scenario {
            parameters,
            initial,
            dt,
            steps,
        } = Scenario::default();

        Self {
            alpha: parameters.alpha.to_string(),
            beta: parameters.beta.to_string(),
            gamma: parameters.gamma.to_string(),
            delta: parameters.delta.to_string(),
            x0: initial.prey.to_string(),
            y0: initial.predator.to_string(),
            dt: dt.to_string(),
            steps: steps.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_three_aligned_entries() {
        let series = solve_series(1.1, 0.4, 0.4, 0.1, 10.0, 10.0, 0.01, 3);

        assert_eq!(series.keys().collect::<Vec<_>>(), vec!["predator", "prey", "t"]);
        assert_eq!(series.aligned_len(), 3);
        assert_eq!(series.get(PREY_KEY).map(|prey| prey[0]), Some(10.0));
        assert_eq!(series.get("time"), None);
    }

    #[test]
    fn negative_steps_give_empty_arrays() {
        let series = solve_series(1.1, 0.4, 0.4, 0.1, 10.0, 10.0, 0.01, -4);

        assert_eq!(series.aligned_len(), 0);
        assert_eq!(series.get(TIME_KEY), Some(&[][..]));
    }

    #[test]
    fn series_matches_direct_solve() {
        let trajectory = solve(0.66, 1.33, 1.0, 1.0, 0.9, 0.9, 0.1, 50);
        let series = solve_series(0.66, 1.33, 1.0, 1.0, 0.9, 0.9, 0.1, 50);

        assert_eq!(series.get(TIME_KEY), Some(trajectory.time()));
        assert_eq!(series.get(PREY_KEY), Some(trajectory.prey()));
        assert_eq!(series.get(PREDATOR_KEY), Some(trajectory.predator()));
    }

    #[test]
    fn aligned_len_is_zero_without_all_keys() {
        assert_eq!(Series::default().aligned_len(), 0);
    }

    #[test]
    fn default_form_matches_default_scenario() {
        let from_form = HostForm::default().solve();
        let direct = Series::from(Scenario::default().solve());

        assert_eq!(from_form, direct);
    }

    #[test]
    fn unparsable_fields_fall_back_independently() {
        let form = HostForm {
            alpha: "abc".into(),
            dt: String::new(),
            steps: "12".into(),
            ..HostForm::default()
        };

        let scenario = Scenario {
            steps: 12,
            ..Scenario::default()
        };

        assert_eq!(form.solve(), Series::from(scenario.solve()));
    }

    #[test]
    fn negative_step_text_gives_empty_series() {
        let form = HostForm {
            steps: "-1".into(),
            ..HostForm::default()
        };

        assert_eq!(form.solve().aligned_len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_is_a_keyed_object() {
        let series = solve_series(1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2);

        let json = series.to_json().unwrap();
        assert!(json.starts_with("{\"predator\":[1.0,"));
        assert!(json.contains("\"t\":[0.0,0.5]"));

        assert_eq!(Series::from_json(&json).unwrap(), series);
    }
}
