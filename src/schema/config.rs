//! Driver configuration types.

use serde::{Deserialize, Serialize};

use super::Seed;

/// Treatment of neighbor lookups at the grid boundary.
///
/// Fixed for the lifetime of a simulation session; never inferred from
/// the grid and never switched mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Out-of-range neighbors count as dead.
    #[default]
    Bounded,
    /// Coordinates wrap modulo the grid dimensions (torus).
    Toroidal,
}

/// Top-level simulation configuration, loadable from JSON by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid height in cells.
    pub rows: usize,
    /// Grid width in cells.
    pub cols: usize,
    /// Boundary treatment for neighbor counting.
    #[serde(default)]
    pub edge_policy: EdgePolicy,
    /// Initial grid contents.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            cols: 35,
            edge_policy: EdgePolicy::Bounded,
            seed: Seed::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_policy_default_is_bounded() {
        assert_eq!(EdgePolicy::default(), EdgePolicy::Bounded);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = SimConfig {
            rows: 10,
            cols: 20,
            edge_policy: EdgePolicy::Toroidal,
            seed: Seed::default(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rows, 10);
        assert_eq!(back.cols, 20);
        assert_eq!(back.edge_policy, EdgePolicy::Toroidal);
    }

    #[test]
    fn test_config_edge_policy_defaults_when_missing() {
        let config: SimConfig = serde_json::from_str(r#"{"rows": 4, "cols": 4}"#).unwrap();
        assert_eq!(config.edge_policy, EdgePolicy::Bounded);
    }
}
