//! Agent configuration loading: the transition system and action
//! precondition graph for a named agent, read from a YAML file.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;

use crate::errors::{SpecError, SpecResult};
use crate::models::TransitionSystem;

/// The raw shape of an agent configuration file.
#[derive(Debug, Default, Deserialize)]
struct RawConfiguration {
    #[serde(default)]
    transition_system: Option<TransitionSystem>,
    #[serde(default)]
    action_preconditions: Option<IndexMap<String, Option<Vec<String>>>>,
}

/// An agent's transition system and action precondition graph.
///
/// A missing or unreadable configuration source yields two empty
/// structures rather than an error; the caller then simply gets a
/// specification without topology or precondition formulas.
#[derive(Debug, Default, Clone)]
pub struct AgentConfiguration {
    pub ts: TransitionSystem,
    pub preconditions: IndexMap<String, Vec<String>>,
}

impl AgentConfiguration {
    /// Load the configuration for the named agent from
    /// `config_dir/<agent>_config.yaml`.
    pub fn load(agent: &str, config_dir: &Path) -> Self {
        let config_path = config_dir.join(format!("{}_config.yaml", agent));

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to load {}: {}", config_path.display(), e);
                return Self::default();
            }
        };

        match Self::from_yaml(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to parse {}: {}", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a configuration from YAML text. Unlike [`Self::load`],
    /// malformed YAML is an error here; only absent sections degrade to
    /// empty structures.
    pub fn from_yaml(contents: &str) -> SpecResult<Self> {
        let raw: RawConfiguration = serde_yaml::from_str(contents)
            .map_err(|e| SpecError::ConfigError(e.to_string()))?;

        let ts = raw.transition_system.unwrap_or_default();
        let preconditions = raw
            .action_preconditions
            .unwrap_or_default()
            .into_iter()
            .map(|(action, pcs)| (action, pcs.unwrap_or_default()))
            .collect();

        Ok(Self { ts, preconditions })
    }
}
