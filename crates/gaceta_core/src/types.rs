use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when a segment carries no `Headline:` marker.
pub const NO_HEADLINE: &str = "No headline";
/// Placeholder shown when a segment carries no `Body:` marker.
pub const NO_BODY: &str = "No content available";
/// Placeholder shown when a segment carries no `Author:` marker.
pub const NO_AUTHOR: &str = "Unknown author";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleOrigin {
    /// Parsed out of the published document.
    Remote,
    /// Created by the user and persisted only in local storage.
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub date: DateTime<Utc>,
    /// Original `dd/mm/yyyy` token as it appeared in the document.
    pub date_raw: String,
    pub headline: String,
    pub body: String,
    pub author: String,
    pub image_url: Option<String>,
    pub slug: String,
    pub origin: ArticleOrigin,
}

impl Article {
    pub fn is_local(&self) -> bool {
        self.origin == ArticleOrigin::Local
    }
}

/// Input for creating a local override article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub headline: String,
    pub body: String,
    pub author: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Defaults to the current day when absent.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Tagged fetch state, replacing the loading/error/data flag triple of the
/// browser builds so impossible combinations cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Sorts newest first by UTC calendar day. The sort is stable, so articles
/// sharing a day keep their encounter order.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by_key(|a| std::cmp::Reverse(a.date.date_naive()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates;

    fn article(headline: &str, token: &str) -> Article {
        let date = dates::parse(token);
        Article {
            id: format!("{}-{}", headline, date.timestamp()),
            date,
            date_raw: token.to_string(),
            headline: headline.to_string(),
            body: "body".to_string(),
            author: "author".to_string(),
            image_url: None,
            slug: headline.to_lowercase(),
            origin: ArticleOrigin::Remote,
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut articles = vec![
            article("a", "05/01/2025"),
            article("b", "07/01/2025"),
            article("c", "06/01/2025"),
        ];
        sort_newest_first(&mut articles);
        let order: Vec<&str> = articles.iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_is_stable_on_same_day() {
        let mut articles = vec![
            article("first", "05/01/2025"),
            article("second", "05/01/2025"),
            article("third", "04/01/2025"),
        ];
        sort_newest_first(&mut articles);
        let order: Vec<&str> = articles.iter().map(|a| a.headline.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fetch_state_serializes_tagged() {
        let failed = FetchState::Failed("Not Found".to_string());
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"status":"failed","reason":"Not Found"}"#);
        assert_eq!(
            serde_json::to_string(&FetchState::Idle).unwrap(),
            r#"{"status":"idle"}"#
        );
    }
}
