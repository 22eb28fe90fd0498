use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gaceta_core::{Article, OverrideStorage, Result};
use tracing::debug;

/// Default file name, the analogue of the fixed localStorage key the
/// browser builds use.
pub const DEFAULT_PATH: &str = "local_articles.json";

/// Stores the override list as one JSON array on disk. Articles are plain
/// records with ISO-8601 dates and are rehydrated on load; a missing file
/// reads as the empty list. Reads and writes are whole-file and carry no
/// transactional guarantee.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OverrideStorage for JsonFileStorage {
    async fn load(&self) -> Result<Vec<Article>> {
        if !self.path.exists() {
            debug!("No override file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save(&self, articles: &[Article]) -> Result<()> {
        let raw = serde_json::to_string_pretty(articles)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
