//! Campaign manifest loader.
//!
//! A campaign lists its levels in play order, with paths relative to the
//! manifest file:
//!
//! ```ron
//! (
//!     config: Some("config.toml"),
//!     levels: ["levels/1.ron", "levels/2.ron"],
//! )
//! ```

use std::path::{Path, PathBuf};

use bomb_core::{GameConfig, LevelLayout};
use serde::{Deserialize, Serialize};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CampaignRon {
    #[serde(default)]
    config: Option<PathBuf>,
    levels: Vec<PathBuf>,
}

/// Everything needed to construct a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Campaign {
    pub config: GameConfig,
    pub levels: Vec<LevelLayout>,
}

/// Loader for campaign manifests.
pub struct CampaignLoader;

impl CampaignLoader {
    /// Loads the manifest, its config (defaults when absent) and every level.
    ///
    /// The first failing file aborts the whole load.
    pub fn load(path: &Path) -> LoadResult<Campaign> {
        let content = read_file(path)?;
        let data: CampaignRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse campaign RON: {}", e))?;

        if data.levels.is_empty() {
            anyhow::bail!("Campaign {} lists no levels", path.display());
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));

        let config = match data.config {
            Some(config) => ConfigLoader::load(&base.join(config))?,
            None => GameConfig::default(),
        };

        let levels = data
            .levels
            .iter()
            .map(|level| LevelLoader::load(&base.join(level)))
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(Campaign { config, levels })
    }
}
