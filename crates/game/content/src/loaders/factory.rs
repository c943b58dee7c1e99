//! Content factory for loading game data from a directory.

use std::path::{Path, PathBuf};

use bomb_core::{GameConfig, LevelLayout};

use crate::loaders::{Campaign, CampaignLoader, ConfigLoader, LevelLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── campaign.ron
/// ├── config.toml
/// └── levels/
///     ├── 1.ron
///     └── 2.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelLayout> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path)
    }

    /// Load the campaign described by `campaign.ron`.
    pub fn load_campaign(&self) -> LoadResult<Campaign> {
        let path = self.data_dir.join("campaign.ron");
        CampaignLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
