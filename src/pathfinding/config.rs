//! Search configuration

use serde::{Deserialize, Serialize};

use super::HeuristicKind;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Heuristic used to order the frontier
    #[serde(default)]
    pub heuristic: HeuristicKind,
    /// Maximum number of node expansions (`None` for unlimited).
    /// Running out is reported as "no path".
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Euclidean,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    /// Set the heuristic
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cap the number of node expansions
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Remove the expansion cap
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.max_iterations = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = SearchConfig::default()
            .with_heuristic(HeuristicKind::Zero)
            .with_max_iterations(64);

        assert_eq!(config.heuristic, HeuristicKind::Zero);
        assert_eq!(config.max_iterations, Some(64));
        assert_eq!(config.unlimited().max_iterations, None);
    }

    #[test]
    fn test_config_from_ron() {
        let config: SearchConfig = ron::from_str("(heuristic: Manhattan)").unwrap();
        assert_eq!(config.heuristic, HeuristicKind::Manhattan);
        assert_eq!(config.max_iterations, None);

        let config: SearchConfig = ron::from_str("(max_iterations: Some(10))").unwrap();
        assert_eq!(config.heuristic, HeuristicKind::Euclidean);
        assert_eq!(config.max_iterations, Some(10));
    }
}
