use super::rollout::PlayoutPolicy;
use crate::core::MAX_SIZE;
use crate::logic::WIN_CONDITION;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

pub const CONFIG_PATH: &str = "ai_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub selfplay: SelfPlaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
    #[serde(default = "default_win_condition")]
    pub win_condition: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub num_simulations: usize,
    #[serde(default)]
    pub policy: PlayoutPolicy,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlaySettings {
    pub num_games: usize,
    pub black: PlayerKind,
    pub white: PlayerKind,
    pub save_records: bool,
    pub record_dir: String,
}

/// 対局者の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Random,
    Rule,
    /// Flat Monte Carlo
    Mc,
}

impl FromStr for PlayerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(PlayerKind::Random),
            "rule" => Ok(PlayerKind::Rule),
            "mc" => Ok(PlayerKind::Mc),
            _ => anyhow::bail!("unknown player kind {:?}", s),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Rule => write!(f, "rule"),
            PlayerKind::Mc => write!(f, "mc"),
        }
    }
}

fn default_win_condition() -> usize {
    WIN_CONDITION
}

impl Default for SelfPlaySettings {
    fn default() -> Self {
        SelfPlaySettings {
            num_games: 10,
            black: PlayerKind::Mc,
            white: PlayerKind::Rule,
            save_records: false,
            record_dir: "selfplay_records".to_string(),
        }
    }
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from_path(CONFIG_PATH)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path.as_ref())?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load {}: {}, using defaults", CONFIG_PATH, e);
            Self::default()
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (2..=MAX_SIZE).contains(&self.board.size),
            "board size {} outside 2..={}",
            self.board.size,
            MAX_SIZE
        );
        ensure!(
            self.board.win_condition >= 2,
            "win_condition must be at least 2, got {}",
            self.board.win_condition
        );
        if self.simulation.num_simulations == 0 {
            warn!("num_simulations is 0, flat monte carlo will score every move 0");
        }
        Ok(())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            board: BoardConfig {
                size: 7,
                win_condition: WIN_CONDITION,
            },
            simulation: SimulationConfig {
                num_simulations: 10,
                policy: PlayoutPolicy::Random,
                seed: None,
                parallel: false,
            },
            selfplay: SelfPlaySettings::default(),
        }
    }
}
