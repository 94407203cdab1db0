//! moveit_benchmark_launch library
//!
//! Builds the launch description for the MoveIt predefined-poses benchmark:
//! one node with its parameter file, robot description, semantic
//! description, kinematics, and planning pipeline parameters.

pub mod benchmark;
pub mod error;
mod file_cache;
pub mod launch;
pub mod package;
pub mod params;
pub mod pipeline;
pub mod record;

pub use benchmark::{build_launch_description, BenchmarkLaunchConfig, PackageFile};
pub use error::{LaunchError, Result};
pub use launch::{LaunchDescription, NodeSpec, OutputTarget};
pub use package::{AmentIndex, PackageResolver};
pub use params::ParameterEntry;
pub use record::{CommandGenerator, NodeRecord, RecordJson};

/// Build the benchmark launch description with default settings, resolving
/// packages from the sourced ROS environment.
pub fn generate_launch_description() -> Result<LaunchDescription> {
    generate_launch_description_with(&BenchmarkLaunchConfig::default(), &AmentIndex::from_env())
}

/// Build the benchmark launch description with an explicit configuration and
/// package resolver.
pub fn generate_launch_description_with<R>(
    config: &BenchmarkLaunchConfig,
    resolver: &R,
) -> Result<LaunchDescription>
where
    R: PackageResolver + ?Sized,
{
    build_launch_description(config, resolver)
}

/// Build the launch description and convert it to record.json form.
pub fn generate_launch_record<R>(config: &BenchmarkLaunchConfig, resolver: &R) -> Result<RecordJson>
where
    R: PackageResolver + ?Sized,
{
    let description = build_launch_description(config, resolver)?;
    CommandGenerator::generate_record(&description, resolver)
}
