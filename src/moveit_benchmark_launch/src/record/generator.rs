//! Command-line and record generation

use crate::{
    error::Result,
    launch::{LaunchDescription, NodeSpec},
    package::{install_prefix_of, PackageResolver},
    params::{flatten_params, ParameterEntry},
    record::types::{NodeRecord, RecordJson},
};
use std::path::Path;

pub struct CommandGenerator;

impl CommandGenerator {
    pub fn generate_record<R>(description: &LaunchDescription, resolver: &R) -> Result<RecordJson>
    where
        R: PackageResolver + ?Sized,
    {
        let node = description
            .nodes()
            .iter()
            .map(|node| Self::generate_node_record(node, resolver))
            .collect::<Result<Vec<_>>>()?;
        Ok(RecordJson { node })
    }

    pub fn generate_node_record<R>(node: &NodeSpec, resolver: &R) -> Result<NodeRecord>
    where
        R: PackageResolver + ?Sized,
    {
        let share_dir = resolver.resolve_share_dir(node.package())?;
        let cmd = Self::generate_node_command(node, &share_dir);

        let mut params = Vec::new();
        let mut params_files = Vec::new();
        for entry in node.parameters() {
            match entry {
                ParameterEntry::File(path) => params_files.push(path.clone()),
                ParameterEntry::Mapping(map) => flatten_params("", map, &mut params),
            }
        }

        Ok(NodeRecord {
            executable: node.executable().to_string(),
            package: node.package().to_string(),
            name: node.name().to_string(),
            prefix: node.prefix().map(str::to_string),
            output: node.output(),
            parameters: node.parameters().to_vec(),
            params,
            params_files,
            cmd,
        })
    }

    /// Full command line, prefix included. Inline parameters are not part of
    /// the command; the launcher delivers them separately.
    pub fn generate_node_command(node: &NodeSpec, share_dir: &Path) -> Vec<String> {
        let mut cmd = Vec::new();

        // 1. Launch prefix
        if let Some(prefix) = node.prefix() {
            cmd.extend(prefix.split_whitespace().map(str::to_string));
        }

        // 2. Executable path
        cmd.push(Self::resolve_executable_path(
            share_dir,
            node.package(),
            node.executable(),
        ));

        // 3. ROS args delimiter and node name
        cmd.push("--ros-args".to_string());
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node.name()));

        // 4. Parameter files
        for path in node.parameters().iter().filter_map(ParameterEntry::as_file) {
            cmd.push("--params-file".to_string());
            cmd.push(path.to_string());
        }

        cmd
    }

    fn resolve_executable_path(share_dir: &Path, package: &str, executable: &str) -> String {
        install_prefix_of(share_dir)
            .join("lib")
            .join(package)
            .join(executable)
            .display()
            .to_string()
    }
}
