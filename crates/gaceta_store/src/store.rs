use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use gaceta_core::slug::slugify;
use gaceta_core::types::sort_newest_first;
use gaceta_core::{
    dates, Article, ArticleDraft, ArticleOrigin, Error, FetchState, NewsSource, OverrideStorage,
    Result,
};
use tracing::{info, warn};
use uuid::Uuid;

/// Owns the current article list: a cached remote snapshot from the news
/// source, unioned with the persisted local overrides. The union is keyed
/// by slug and left-biased: a local article always suppresses a remote one
/// with the same slug, even if the document changed afterwards.
pub struct ArticleStore {
    source: Arc<dyn NewsSource>,
    storage: Arc<dyn OverrideStorage>,
    remote_cache: Vec<Article>,
    fetched_once: bool,
    state: FetchState,
}

impl ArticleStore {
    pub fn new(source: Arc<dyn NewsSource>, storage: Arc<dyn OverrideStorage>) -> Self {
        Self {
            source,
            storage,
            remote_cache: Vec::new(),
            fetched_once: false,
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Re-reads the source when forced (or never fetched yet), then returns
    /// the merged view. On a failed fetch the previous remote snapshot is
    /// kept visible and the error surfaces to the caller; retrying is
    /// always a fresh caller-initiated call.
    pub async fn refresh(&mut self, force: bool) -> Result<Vec<Article>> {
        if force || !self.fetched_once {
            self.state = FetchState::Loading;
            match self.source.fetch_articles().await {
                Ok(articles) => {
                    self.remote_cache = articles;
                    self.fetched_once = true;
                    self.state = FetchState::Loaded;
                }
                Err(e) => {
                    warn!("Fetch from {} failed: {}", self.source.name(), e);
                    self.state = FetchState::Failed(e.to_string());
                    return Err(e);
                }
            }
        }
        self.merged().await
    }

    /// The current merged view without touching the network.
    pub async fn articles(&self) -> Result<Vec<Article>> {
        self.merged().await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Article> {
        self.merged()
            .await?
            .into_iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| Error::NotFound(format!("No article with slug: {}", slug)))
    }

    /// Creates a local override article and persists it.
    pub async fn add(&mut self, draft: ArticleDraft) -> Result<Article> {
        let date = draft.date.unwrap_or_else(Utc::now);
        let article = Article {
            id: Uuid::new_v4().to_string(),
            date,
            date_raw: dates::format_dmy(&date),
            slug: slugify(&draft.headline),
            headline: draft.headline,
            body: draft.body,
            author: draft.author,
            image_url: draft.image_url,
            origin: ArticleOrigin::Local,
        };

        let mut local = self.storage.load().await?;
        local.push(article.clone());
        self.storage.save(&local).await?;
        info!("📝 Added local article {} ({})", article.headline, article.id);
        Ok(article)
    }

    /// Removes a local override. Remote articles come back on the next
    /// fetch anyway, so deleting them is refused outright.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        if self.remote_cache.iter().any(|a| a.id == id) {
            return Err(Error::RemoteArticle(format!(
                "Article {} comes from the published document and cannot be deleted",
                id
            )));
        }

        let mut local = self.storage.load().await?;
        let before = local.len();
        local.retain(|a| a.id != id);
        if local.len() == before {
            return Err(Error::NotFound(format!("No article with id: {}", id)));
        }
        self.storage.save(&local).await?;
        info!("🗑️ Removed local article {}", id);
        Ok(())
    }

    async fn merged(&self) -> Result<Vec<Article>> {
        let local = self.storage.load().await?;
        let local_slugs: HashSet<&str> = local.iter().map(|a| a.slug.as_str()).collect();

        let mut merged = local.clone();
        merged.extend(
            self.remote_cache
                .iter()
                .filter(|a| !local_slugs.contains(a.slug.as_str()))
                .cloned(),
        );
        sort_newest_first(&mut merged);
        Ok(merged)
    }
}
