//! Level layout loader.
//!
//! A level file lists its rows top to bottom, one entity code per cell:
//!
//! ```ron
//! (rows: [
//!     "SSSS",
//!     "SP_S",
//!     "SSnS",
//! ])
//! ```

use std::path::Path;

use bomb_core::LevelLayout;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Level data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelRon {
    rows: Vec<String>,
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level {}: {}", path.display(), e))
    }

    /// Parses RON text. Unknown entity codes and ragged rows are errors.
    pub fn parse(content: &str) -> LoadResult<LevelLayout> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;

        let layout = LevelLayout::from_rows(&data.rows)?;
        Ok(layout)
    }
}
