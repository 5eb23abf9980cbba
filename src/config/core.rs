use super::{ChunkSysConfig, GameplayConfig, WorldGenConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub log_level: String,
    pub chunksys: ChunkSysConfig,
    pub worldgen: WorldGenConfig,
    pub gameplay: GameplayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            chunksys: ChunkSysConfig::default(),
            worldgen: WorldGenConfig::default(),
            gameplay: GameplayConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Unparseable levels fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Reads the config at `path`, writing the defaults there first if the file
/// does not exist yet.
pub fn load_or_create_config(path: &Path) -> Result<EngineConfig> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    if !path.exists() {
        let default_config = EngineConfig::default();
        let toml_content = toml::to_string_pretty(&default_config)
            .context("Failed to encode default config")?;
        std::fs::write(path, toml_content).context("Failed to write default config")?;
        info!("Wrote default config to {}", path.display());
        return Ok(default_config);
    }

    let content = std::fs::read_to_string(path).context("Failed to read config file")?;
    let config = toml::from_str(&content).context("Failed to parse config file")?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "MetroManDevTeam", "VoxelVerse")
        .context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join("voxelverse.toml"))
}
