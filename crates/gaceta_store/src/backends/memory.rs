use async_trait::async_trait;
use gaceta_core::{Article, OverrideStorage, Result};
use tokio::sync::RwLock;

/// Keeps the override list in process memory only. Used by tests and by
/// `--storage memory` runs where persistence across invocations does not
/// matter.
#[derive(Default)]
pub struct MemoryStorage {
    articles: RwLock<Vec<Article>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OverrideStorage for MemoryStorage {
    async fn load(&self) -> Result<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn save(&self, articles: &[Article]) -> Result<()> {
        *self.articles.write().await = articles.to_vec();
        Ok(())
    }
}
