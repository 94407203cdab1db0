use moveit_benchmark_launch::{
    generate_launch_description_with, generate_launch_record, AmentIndex, BenchmarkLaunchConfig,
    OutputTarget, ParameterEntry,
};
use serde_yaml::Value;
use std::path::PathBuf;

/// Install prefix holding the Panda fixture packages
fn fixture_prefix() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/install")
}

fn fixture_index() -> AmentIndex {
    AmentIndex::new(vec![fixture_prefix()])
}

fn ompl_inner(entry: &ParameterEntry) -> &serde_yaml::Mapping {
    entry
        .get("ompl")
        .and_then(Value::as_mapping)
        .expect("pipeline entry should hold an ompl mapping")
}

#[test]
fn test_exactly_one_node() {
    let description =
        generate_launch_description_with(&BenchmarkLaunchConfig::default(), &fixture_index())
            .unwrap();
    assert_eq!(description.nodes().len(), 1);

    let node = &description.nodes()[0];
    assert_eq!(node.name(), "moveit_run_benchmark");
    assert_eq!(node.package(), "moveit_ros_benchmarks");
    assert_eq!(node.executable(), "moveit_combine_predefined_poses_benchmark");
    assert_eq!(node.prefix(), Some("xterm -e gdb --ex=run --args"));
    assert_eq!(node.output(), OutputTarget::Screen);
}

#[test]
fn test_parameter_order() {
    let description =
        generate_launch_description_with(&BenchmarkLaunchConfig::default(), &fixture_index())
            .unwrap();
    let params = description.nodes()[0].parameters();
    assert_eq!(params.len(), 5);

    let expected_path = fixture_prefix()
        .join("share/moveit_ros_benchmarks/demo_panda_predefined_poses.yaml")
        .display()
        .to_string();
    assert_eq!(params[0].as_file(), Some(expected_path.as_str()));

    let keys: Vec<&str> = params[1..]
        .iter()
        .map(|entry| {
            let map = entry.as_mapping().expect("inline entry");
            assert_eq!(map.len(), 1);
            map.keys().next().and_then(Value::as_str).unwrap()
        })
        .collect();
    assert_eq!(
        keys,
        vec![
            "robot_description",
            "robot_description_semantic",
            "robot_description_kinematics",
            "ompl",
        ]
    );
}

#[test]
fn test_descriptions_are_file_text() {
    let description =
        generate_launch_description_with(&BenchmarkLaunchConfig::default(), &fixture_index())
            .unwrap();
    let params = description.nodes()[0].parameters();

    let urdf = std::fs::read_to_string(
        fixture_prefix().join("share/moveit_resources/panda_description/urdf/panda.urdf"),
    )
    .unwrap();
    assert_eq!(
        params[1].get("robot_description").and_then(Value::as_str),
        Some(urdf.as_str())
    );

    let srdf = params[2]
        .get("robot_description_semantic")
        .and_then(Value::as_str)
        .unwrap();
    assert!(srdf.contains("<group name=\"panda_arm\">"));

    let kinematics = params[3].get("robot_description_kinematics").unwrap();
    assert_eq!(
        kinematics["panda_arm"]["kinematics_solver"].as_str(),
        Some("kdl_kinematics_plugin/KDLKinematicsPlugin")
    );
}

#[test]
fn test_pipeline_merges_planning_file() {
    let description =
        generate_launch_description_with(&BenchmarkLaunchConfig::default(), &fixture_index())
            .unwrap();
    let ompl = ompl_inner(&description.nodes()[0].parameters()[4]);

    // Static keys survive, loaded keys are added
    assert_eq!(
        ompl.get("planning_plugin").and_then(Value::as_str),
        Some("ompl_interface/OMPLPlanner")
    );
    assert_eq!(
        ompl.get("start_state_max_bounds_error").and_then(Value::as_f64),
        Some(0.1)
    );
    let adapters = ompl
        .get("request_adapters")
        .and_then(Value::as_str)
        .unwrap();
    assert_eq!(adapters.split(' ').count(), 5);
    assert!(ompl.get("planner_configs").is_some());
    assert!(ompl.get("panda_arm").is_some());
    assert_eq!(ompl.len(), 5);
}

#[test]
fn test_record_from_fixtures() {
    let record = generate_launch_record(&BenchmarkLaunchConfig::default(), &fixture_index()).unwrap();
    assert_eq!(record.node.len(), 1);

    let node = &record.node[0];
    let exec_path = fixture_prefix()
        .join("lib/moveit_ros_benchmarks/moveit_combine_predefined_poses_benchmark")
        .display()
        .to_string();
    assert_eq!(&node.cmd[..5], &["xterm", "-e", "gdb", "--ex=run", "--args"]);
    assert_eq!(node.cmd[5], exec_path);
    assert!(node.cmd.contains(&"__node:=moveit_run_benchmark".to_string()));
    assert_eq!(node.params_files.len(), 1);
    assert!(node.params.contains(&(
        "ompl.panda_arm.projection_evaluator".to_string(),
        "joints(panda_joint1,panda_joint2)".to_string()
    )));

    let json = record.to_json().unwrap();
    assert!(json.contains("\"robot_description_semantic\""));
}

#[test]
fn test_config_without_prefix() {
    let config = BenchmarkLaunchConfig {
        launch_prefix: None,
        ..Default::default()
    };
    let record = generate_launch_record(&config, &fixture_index()).unwrap();
    let node = &record.node[0];
    assert_eq!(node.prefix, None);
    assert!(node.cmd[0].ends_with("moveit_combine_predefined_poses_benchmark"));
}
