use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Fetches the source and returns every article it currently carries.
    /// The result replaces any previous snapshot in full; there is no
    /// incremental update.
    async fn fetch_articles(&self) -> Result<Vec<Article>>;
}
