use lotka_volterra::Scenario;

/// Config formats a scenario file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid JSON scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML scenario: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Parses a scenario from config text.
///
/// # Errors
///
/// Returns a [`LoadError`] if `text` is not a valid scenario in `format`.
pub fn load(format: Format, text: &str) -> Result<Scenario, LoadError> {
    let scenario = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
        Format::Toml => toml::from_str(text)?,
    };
    Ok(scenario)
}

/// The classic textbook configuration, as JSON.
pub const CLASSIC_JSON: &str = r#"{
  "parameters": { "alpha": 1.1, "beta": 0.4, "gamma": 0.4, "delta": 0.1 },
  "initial": { "prey": 10.0, "predator": 10.0 },
  "dt": 0.01,
  "steps": 3
}"#;

/// The classic textbook configuration, as YAML.
pub const CLASSIC_YAML: &str = "
parameters:
  alpha: 1.1
  beta: 0.4
  gamma: 0.4
  delta: 0.1
initial:
  prey: 10.0
  predator: 10.0
dt: 0.01
steps: 3
";

/// The classic textbook configuration, as TOML.
pub const CLASSIC_TOML: &str = "
dt = 0.01
steps = 3

[parameters]
alpha = 1.1
beta = 0.4
gamma = 0.4
delta = 0.1

[initial]
prey = 10.0
predator = 10.0
";
