use approx::assert_relative_eq;
use integration_tests::scenarios::{
    CLASSIC_JSON, CLASSIC_TOML, CLASSIC_YAML, Format, LoadError, load,
};
use lotka_volterra::{Parameters, Populations, Scenario, ScenarioError, solve};

fn classic() -> Scenario {
    Scenario {
        parameters: Parameters {
            alpha: 1.1,
            beta: 0.4,
            gamma: 0.4,
            delta: 0.1,
        },
        initial: Populations {
            prey: 10.0,
            predator: 10.0,
        },
        dt: 0.01,
        steps: 3,
    }
}

#[test]
fn every_format_loads_the_same_scenario() {
    for (format, text) in [
        (Format::Json, CLASSIC_JSON),
        (Format::Yaml, CLASSIC_YAML),
        (Format::Toml, CLASSIC_TOML),
    ] {
        let scenario = load(format, text).expect("scenario should parse");
        assert_eq!(scenario, classic(), "{format:?}");
    }
}

#[test]
fn loaded_scenario_solves_like_the_scalar_call() {
    let scenario = load(Format::Yaml, CLASSIC_YAML).expect("scenario should parse");

    let from_file = scenario.solve();
    let direct = solve(1.1, 0.4, 0.4, 0.1, 10.0, 10.0, 0.01, 3);

    assert_eq!(from_file, direct);
    assert_relative_eq!(from_file.prey()[1], 9.71301544577691, epsilon = 1e-12);
    assert_relative_eq!(from_file.predator()[1], 10.058731841949738, epsilon = 1e-12);
}

#[test]
fn scenario_round_trips_through_json() {
    let json = serde_json::to_string(&classic()).expect("scenario should serialize");

    let scenario = load(Format::Json, &json).expect("scenario should parse");

    assert_eq!(scenario, classic());
}

#[test]
fn negative_steps_are_rejected_by_the_config_layer() {
    let text = CLASSIC_JSON.replace("\"steps\": 3", "\"steps\": -3");

    let err = load(Format::Json, &text).expect_err("steps must be unsigned");

    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn missing_fields_are_reported() {
    let err = load(Format::Toml, "dt = 0.1\nsteps = 10\n").expect_err("parameters are required");

    assert!(matches!(err, LoadError::Toml(_)));
    assert!(err.to_string().starts_with("invalid TOML scenario"));
}

#[test]
fn validation_is_separate_from_loading() {
    let text = CLASSIC_YAML.replace("dt: 0.01", "dt: -0.01");
    let scenario = load(Format::Yaml, &text).expect("scenario should parse");

    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::NonPositiveStep(-0.01))
    );

    let trajectory = scenario.solve();
    assert_eq!(trajectory.len(), 3);
    assert_relative_eq!(trajectory.time()[2], -0.02);
}
