//! Serializable settings for games and solves
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::Result;

/// The construction parameters of a game
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// number of columns
    pub width: u32,
    /// number of rows
    pub height: u32,
    /// how far the tail starts from the left edge
    pub start_offset: u32,
    /// number of body segments, head included, at the start of the game
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 11,
            height: 11,
            start_offset: 2,
            initial_length: 3,
        }
    }
}

impl GameConfig {
    /// a config with a custom board size and the default snake
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// reads a config from json, missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// number of playable cells
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Limits on a single solve. The search has no memoization, so without a
/// budget the open set can grow without bound on adversarial boards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// give up after expanding this many nodes
    pub max_expanded_nodes: Option<usize>,
    /// give up after this many milliseconds of wall clock
    pub time_budget_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_expanded_nodes: Some(200_000),
            time_budget_ms: None,
        }
    }
}

impl SolverConfig {
    /// no limits at all, only safe for boards where the pruning rule already
    /// bounds the tree
    pub fn unbounded() -> Self {
        Self {
            max_expanded_nodes: None,
            time_budget_ms: None,
        }
    }

    /// reads a config from json, missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// the wall clock budget, if any
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 11);
        assert_eq!(config.height, 11);
        assert_eq!(config.start_offset, 2);
        assert_eq!(config.initial_length, 3);
        assert_eq!(config.capacity(), 121);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{"width": 20, "initial_length": 5}"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 11);
        assert_eq!(config.initial_length, 5);
    }

    #[test]
    fn test_bad_json_is_a_config_error() {
        let err = GameConfig::from_json(r#"{"width": -3}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_solver_config_json() {
        let config = SolverConfig::from_json(r#"{"time_budget_ms": 250}"#).unwrap();
        assert_eq!(config.max_expanded_nodes, Some(200_000));
        assert_eq!(config.time_budget(), Some(Duration::from_millis(250)));

        let unbounded = SolverConfig::from_json(r#"{"max_expanded_nodes": null}"#).unwrap();
        assert_eq!(unbounded, SolverConfig::unbounded());
    }
}
