use std::path::Path;

use log::warn;
use regex::Regex;
use serde::Deserialize;

use crate::checks::types::State;
use crate::error::{AgentError, Result};

fn default_snapshot_state() -> State {
    State::Warn
}

fn default_levels() -> (f64, f64) {
    (80.0, 90.0)
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnapshotParams {
    /// State when snapshots are found.
    #[serde(default = "default_snapshot_state")]
    pub state: State,
    /// Descriptions matching these are counted even if ignored.
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for SnapshotParams {
    fn default() -> Self {
        Self {
            state: default_snapshot_state(),
            allow: Vec::new(),
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SnapshotEngineParams {
    #[serde(default = "default_snapshot_state")]
    pub state: State,
}

impl Default for SnapshotEngineParams {
    fn default() -> Self {
        Self {
            state: default_snapshot_state(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FilesystemParams {
    /// Warn and crit levels on used space, in percent.
    #[serde(default = "default_levels")]
    pub levels: (f64, f64),
}

impl Default for FilesystemParams {
    fn default() -> Self {
        Self {
            levels: default_levels(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckParams {
    pub snapshots: SnapshotParams,
    pub snapshots_engine: SnapshotEngineParams,
    pub storage_domains: FilesystemParams,
}

impl CheckParams {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let params: Self = serde_yaml::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }

    fn validate(&self) -> Result<()> {
        let (warn, crit) = self.storage_domains.levels;
        if !(0.0..=100.0).contains(&warn) || !(0.0..=100.0).contains(&crit) || warn > crit {
            return Err(AgentError::InvalidParams(format!(
                "storage domain levels must satisfy 0 <= warn <= crit <= 100, got ({}, {})",
                warn, crit
            )));
        }
        compile_patterns(&self.snapshots.allow)?;
        compile_patterns(&self.snapshots.ignore)?;
        Ok(())
    }
}

pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AgentError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Compile what compiles; invalid patterns are logged and skipped one by one.
pub fn compile_valid_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                warn!("Skipping invalid pattern '{}': {}", pattern, e);
                None
            }
        })
        .collect()
}
