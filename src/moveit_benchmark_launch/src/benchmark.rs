//! Launch configuration for the predefined-poses benchmark node

use crate::{
    error::{LaunchError, Result},
    file_cache::read_file_cached,
    launch::{LaunchDescription, NodeSpec, OutputTarget},
    package::PackageResolver,
    params::{expect_mapping, ParameterEntry},
    pipeline::PlanningPipelineDefaults,
};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;

/// A file addressed relative to a package's share directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFile {
    pub package: String,
    pub path: String,
}

impl PackageFile {
    pub fn new(package: &str, path: &str) -> Self {
        Self {
            package: package.to_string(),
            path: path.to_string(),
        }
    }
}

/// Every name and path the benchmark launch depends on.
///
/// `Default` describes the Panda demo. Any subset can be overridden from a
/// YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkLaunchConfig {
    pub benchmark_package: String,
    /// Relative to the benchmark package's share directory
    pub benchmark_params_file: String,
    pub robot_description: PackageFile,
    pub robot_description_semantic: PackageFile,
    pub robot_description_kinematics: PackageFile,
    pub planning_params: PackageFile,
    pub pipeline: PlanningPipelineDefaults,
    pub node_name: String,
    pub executable: String,
    pub launch_prefix: Option<String>,
    pub output: OutputTarget,
}

impl Default for BenchmarkLaunchConfig {
    fn default() -> Self {
        Self {
            benchmark_package: "moveit_ros_benchmarks".to_string(),
            benchmark_params_file: "demo_panda_predefined_poses.yaml".to_string(),
            robot_description: PackageFile::new(
                "moveit_resources",
                "panda_description/urdf/panda.urdf",
            ),
            robot_description_semantic: PackageFile::new(
                "moveit_resources",
                "panda_moveit_config/config/panda.srdf",
            ),
            robot_description_kinematics: PackageFile::new(
                "moveit_resources",
                "panda_moveit_config/config/kinematics.yaml",
            ),
            planning_params: PackageFile::new(
                "moveit_resources",
                "panda_moveit_config/config/ompl_planning.yaml",
            ),
            pipeline: PlanningPipelineDefaults::default(),
            node_name: "moveit_run_benchmark".to_string(),
            executable: "moveit_combine_predefined_poses_benchmark".to_string(),
            launch_prefix: Some("xterm -e gdb --ex=run --args".to_string()),
            output: OutputTarget::Screen,
        }
    }
}

impl BenchmarkLaunchConfig {
    /// Load a configuration file. Absent fields keep their defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = read_file_cached(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| LaunchError::YamlErrorWithContext {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Assemble the benchmark node and its five parameter entries.
///
/// Entries, in order: the benchmark parameter file path,
/// `robot_description`, `robot_description_semantic`,
/// `robot_description_kinematics`, and the planning pipeline mapping.
/// The first failing lookup aborts the whole build.
pub fn build_launch_description<R>(
    config: &BenchmarkLaunchConfig,
    resolver: &R,
) -> Result<LaunchDescription>
where
    R: PackageResolver + ?Sized,
{
    let benchmark_params = resolver
        .resolve_share_dir(&config.benchmark_package)?
        .join(&config.benchmark_params_file);
    let benchmark_params = ParameterEntry::file(benchmark_params.display().to_string());

    let urdf = load_text(resolver, &config.robot_description)?;
    let robot_description = ParameterEntry::single("robot_description", urdf);

    let srdf = load_text(resolver, &config.robot_description_semantic)?;
    let robot_description_semantic = ParameterEntry::single("robot_description_semantic", srdf);

    let kinematics = load_yaml(resolver, &config.robot_description_kinematics)?;
    let robot_description_kinematics =
        ParameterEntry::single("robot_description_kinematics", kinematics);

    let planning = load_yaml(resolver, &config.planning_params)?;
    let planning = expect_mapping(
        planning,
        &format!(
            "{}/{}",
            config.planning_params.package, config.planning_params.path
        ),
    )?;
    let planning_pipeline = config.pipeline.build(planning);

    let node = NodeSpec::new(&config.node_name, &config.benchmark_package, &config.executable)
        .with_prefix(config.launch_prefix.clone())
        .with_output(config.output)
        .with_parameters(vec![
            benchmark_params,
            robot_description,
            robot_description_semantic,
            robot_description_kinematics,
            planning_pipeline,
        ]);

    log::info!(
        "Prepared node {} ({}/{}) with {} parameter entries",
        node.name(),
        node.package(),
        node.executable(),
        node.parameters().len()
    );

    Ok(LaunchDescription::new(vec![node]))
}

fn load_text<R: PackageResolver + ?Sized>(resolver: &R, file: &PackageFile) -> Result<String> {
    resolver.load_text(&file.package, &file.path)
}

fn load_yaml<R: PackageResolver + ?Sized>(resolver: &R, file: &PackageFile) -> Result<Value> {
    resolver.load_yaml(&file.package, &file.path)
}
