use async_trait::async_trait;
use gaceta_core::{Article, Error, NewsSource, Result};
use tracing::info;

use crate::parser;

/// News source backed by a single published Google Doc. The document's
/// published HTML endpoint is the whole content backend; every fetch
/// re-reads it in full.
pub struct DocSource {
    url: String,
}

impl DocSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_html(&self) -> Result<String> {
        let response = reqwest::get(&self.url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string(),
            ));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl NewsSource for DocSource {
    fn name(&self) -> &str {
        "published document"
    }

    async fn fetch_articles(&self) -> Result<Vec<Article>> {
        info!("📰 Fetching published document");
        let html = self.fetch_html().await?;
        let articles = parser::parse_document(&html);
        info!("🗞️ Extracted {} articles from document", articles.len());
        Ok(articles)
    }
}
