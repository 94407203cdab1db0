//! Launch description and node specification

use crate::{error::LaunchError, params::ParameterEntry};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where a launched process writes its stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Screen,
    Log,
    Both,
}

impl FromStr for OutputTarget {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "screen" => Ok(OutputTarget::Screen),
            "log" => Ok(OutputTarget::Log),
            "both" => Ok(OutputTarget::Both),
            other => Err(LaunchError::InvalidOutput(other.to_string())),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputTarget::Screen => "screen",
            OutputTarget::Log => "log",
            OutputTarget::Both => "both",
        };
        f.write_str(s)
    }
}

/// A single process to launch. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSpec {
    name: String,
    package: String,
    executable: String,
    prefix: Option<String>,
    output: OutputTarget,
    parameters: Vec<ParameterEntry>,
}

impl NodeSpec {
    pub fn new(
        name: impl Into<String>,
        package: impl Into<String>,
        executable: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            executable: executable.into(),
            prefix: None,
            output: OutputTarget::default(),
            parameters: Vec::new(),
        }
    }

    /// Command the executable is wrapped in, e.g. a debugger.
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterEntry>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn output(&self) -> OutputTarget {
        self.output
    }

    pub fn parameters(&self) -> &[ParameterEntry] {
        &self.parameters
    }
}

/// Ordered set of processes handed to the launcher.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LaunchDescription {
    nodes: Vec<NodeSpec>,
}

impl LaunchDescription {
    pub fn new(nodes: Vec<NodeSpec>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeSpec] {
        &self.nodes
    }
}
