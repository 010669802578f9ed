//! Quiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::QuizEngineConfig;

/// Top-level quiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Records file to read problems from.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Total time budget in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Whether the time limit is enforced at all.
    #[serde(default = "default_true")]
    pub timed: bool,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            time_limit_secs: default_time_limit(),
            timed: true,
        }
    }
}

impl QuizConfig {
    /// Engine settings derived from this configuration.
    pub fn engine_config(&self) -> QuizEngineConfig {
        if self.timed {
            QuizEngineConfig::timed(Duration::from_secs(self.time_limit_secs))
        } else {
            QuizEngineConfig::untimed()
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quiz.toml` in the current directory
/// 2. `~/.config/quiz/config.toml`
///
/// Environment variable overrides: `QUIZ_CSV`, `QUIZ_TIME_LIMIT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config_file(&path)?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Apply `QUIZ_*` overrides looked up through `lookup`.
fn apply_env_overrides(
    config: &mut QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(csv) = lookup("QUIZ_CSV") {
        config.csv = PathBuf::from(csv);
    }
    if let Some(limit) = lookup("QUIZ_TIME_LIMIT") {
        config.time_limit_secs = limit
            .trim()
            .parse()
            .with_context(|| format!("QUIZ_TIME_LIMIT is not a number of seconds: {limit}"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quiz"))
}
