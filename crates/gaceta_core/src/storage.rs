use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// Persistence seam for the local override list, the equivalent of the
/// single localStorage key the browser builds write under.
#[async_trait]
pub trait OverrideStorage: Send + Sync {
    /// Load the persisted local articles
    async fn load(&self) -> Result<Vec<Article>>;

    /// Persist the local article list in full
    async fn save(&self, articles: &[Article]) -> Result<()>;
}
