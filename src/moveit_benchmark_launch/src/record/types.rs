//! record.json data structures

use crate::{launch::OutputTarget, params::ParameterEntry};
use serde::{Deserialize, Serialize};

/// Root structure for record.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordJson {
    pub node: Vec<NodeRecord>,
}

impl RecordJson {
    pub fn new() -> Self {
        Self { node: Vec::new() }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Node record structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub executable: String,
    pub package: String,
    pub name: String,
    pub prefix: Option<String>,
    pub output: OutputTarget,
    /// Parameter entries as declared, in order
    pub parameters: Vec<ParameterEntry>,
    /// Inline parameters flattened to dotted names
    pub params: Vec<(String, String)>,
    pub params_files: Vec<String>,
    pub cmd: Vec<String>,
}
