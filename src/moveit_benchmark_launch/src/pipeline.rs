//! Planning pipeline parameter defaults

use crate::params::{overlay, ParameterEntry};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

pub const OMPL_PIPELINE: &str = "ompl";
pub const OMPL_PLANNING_PLUGIN: &str = "ompl_interface/OMPLPlanner";
pub const DEFAULT_START_STATE_MAX_BOUNDS_ERROR: f64 = 0.1;

/// Request adapters applied around the planner, in execution order.
pub const DEFAULT_REQUEST_ADAPTERS: &[&str] = &[
    "default_planner_request_adapters/AddTimeOptimalParameterization",
    "default_planner_request_adapters/FixWorkspaceBounds",
    "default_planner_request_adapters/FixStartStateBounds",
    "default_planner_request_adapters/FixStartStateCollision",
    "default_planner_request_adapters/FixStartStatePathConstraints",
];

/// Statically declared parameters of one planning pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningPipelineDefaults {
    /// Namespace the pipeline parameters live under
    pub name: String,
    pub planning_plugin: String,
    pub request_adapters: Vec<String>,
    pub start_state_max_bounds_error: f64,
}

impl Default for PlanningPipelineDefaults {
    fn default() -> Self {
        Self {
            name: OMPL_PIPELINE.to_string(),
            planning_plugin: OMPL_PLANNING_PLUGIN.to_string(),
            request_adapters: DEFAULT_REQUEST_ADAPTERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            start_state_max_bounds_error: DEFAULT_START_STATE_MAX_BOUNDS_ERROR,
        }
    }
}

impl PlanningPipelineDefaults {
    /// Adapters as the single space-separated string the planner expects.
    pub fn request_adapters_param(&self) -> String {
        self.request_adapters.join(" ")
    }

    /// The static parameters, without the pipeline namespace.
    pub fn to_mapping(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert(
            Value::from("planning_plugin"),
            Value::from(self.planning_plugin.as_str()),
        );
        map.insert(
            Value::from("request_adapters"),
            Value::from(self.request_adapters_param()),
        );
        map.insert(
            Value::from("start_state_max_bounds_error"),
            Value::from(self.start_state_max_bounds_error),
        );
        map
    }

    /// `{<name>: defaults}` with `overrides` laid over the inner mapping.
    pub fn build(&self, overrides: Mapping) -> ParameterEntry {
        let mut inner = self.to_mapping();
        overlay(&mut inner, overrides);
        ParameterEntry::single(&self.name, Value::Mapping(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(entry: &ParameterEntry) -> &Mapping {
        entry
            .get(OMPL_PIPELINE)
            .and_then(Value::as_mapping)
            .unwrap()
    }

    #[test]
    fn test_default_mapping() {
        let map = PlanningPipelineDefaults::default().to_mapping();
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get("planning_plugin").and_then(Value::as_str),
            Some("ompl_interface/OMPLPlanner")
        );
        assert_eq!(
            map.get("start_state_max_bounds_error").and_then(Value::as_f64),
            Some(0.1)
        );
    }

    #[test]
    fn test_request_adapters_joined_with_spaces() {
        let adapters = PlanningPipelineDefaults::default().request_adapters_param();
        let tokens: Vec<&str> = adapters.split(' ').collect();
        assert_eq!(tokens, DEFAULT_REQUEST_ADAPTERS);
        assert!(adapters.starts_with(
            "default_planner_request_adapters/AddTimeOptimalParameterization default_planner_request_adapters/FixWorkspaceBounds"
        ));
    }

    #[test]
    fn test_build_without_overrides() {
        let entry = PlanningPipelineDefaults::default().build(Mapping::new());
        assert_eq!(entry.as_mapping().map(Mapping::len), Some(1));
        assert_eq!(inner(&entry).len(), 3);
    }

    #[test]
    fn test_build_override_replaces_plugin() {
        let overrides: Mapping = serde_yaml::from_str("planning_plugin: X\n").unwrap();
        let entry = PlanningPipelineDefaults::default().build(overrides);

        let map = inner(&entry);
        assert_eq!(map.get("planning_plugin").and_then(Value::as_str), Some("X"));
        assert!(map.get("request_adapters").is_some());
        assert!(map.get("start_state_max_bounds_error").is_some());
    }

    #[test]
    fn test_defaults_deserialize_partially() {
        let defaults: PlanningPipelineDefaults =
            serde_yaml::from_str("planning_plugin: chomp_interface/CHOMPPlanner\n").unwrap();
        assert_eq!(defaults.planning_plugin, "chomp_interface/CHOMPPlanner");
        assert_eq!(defaults.name, "ompl");
        assert_eq!(defaults.request_adapters.len(), 5);
    }
}
