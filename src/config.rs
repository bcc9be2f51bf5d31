use crate::error::{Error, Result};
use crate::graph_traits::Category;
use crate::mask::{Background, RPLAN_BACKGROUND};
use crate::matching::MatchMode;
use crate::ssig::{check_gamma, DEFAULT_GAMMA};
use serde::Deserialize;

/// Settings for scoring floor-plan pairs. Every key is optional in TOML:
///
/// ```toml
/// background = 12
/// include_background = false
/// gamma = 0.4
/// match_nodes = true
/// match_edges = true
/// max_expansions = 100000
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub background: Category,
    pub include_background: bool,
    pub gamma: f32,
    pub match_nodes: bool,
    pub match_edges: bool,
    /// Search budget of the exact edit distance; unbounded if absent.
    pub max_expansions: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            background: RPLAN_BACKGROUND,
            include_background: false,
            gamma: DEFAULT_GAMMA,
            match_nodes: true,
            match_edges: true,
            max_expansions: None,
        }
    }
}

impl ScoringConfig {
    pub fn from_toml_str(s: &str) -> Result<ScoringConfig> {
        let config: ScoringConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_gamma(self.gamma)?;
        if self.max_expansions == Some(0) {
            return Err(Error::InvalidBudget);
        }
        Ok(())
    }

    pub fn background(&self) -> Background {
        Background {
            code: self.background,
            include: self.include_background,
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        MatchMode::new(self.match_nodes, self.match_edges)
    }
}
