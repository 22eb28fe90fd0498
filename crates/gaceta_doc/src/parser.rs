use gaceta_core::slug::slugify;
use gaceta_core::types::{NO_AUTHOR, NO_BODY, NO_HEADLINE};
use gaceta_core::{dates, Article, ArticleOrigin};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::drive;

lazy_static! {
    static ref HEADER: Regex = Regex::new(r"News \d+ \((\d{1,2}/\d{1,2}/\d{4})\):").unwrap();
    static ref HEADLINE: Regex = Regex::new(r"(?s)Headline:\s*(.*?)\s*(?:Image:|$)").unwrap();
    static ref BODY: Regex = Regex::new(r"(?s)Body:\s*(.*?)\s*(?:Author:|$)").unwrap();
    static ref AUTHOR: Regex = Regex::new(r"Author:\s*(.*)").unwrap();
    static ref DRIVE_LINK: Regex =
        Regex::new(r#"https://drive\.google\.com/file/d/[^"'\s\\]+"#).unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Parses the published document's HTML into remote article records.
///
/// Articles are delimited by `News <n> (<dd/mm/yyyy>):` markers in the
/// flattened text of the content container. A document without the
/// container, or without any marker, yields an empty list; parsing itself
/// never fails.
pub fn parse_document(html: &str) -> Vec<Article> {
    let document = Html::parse_document(html);
    let Some(root) = content_root(&document) else {
        debug!("Document has no content container, treating as zero articles");
        return Vec::new();
    };
    let text = root.text().collect::<String>();

    let headers: Vec<(usize, usize, String)> = HEADER
        .captures_iter(&text)
        .map(|caps| {
            let marker = caps.get(0).unwrap();
            (marker.start(), marker.end(), caps[1].to_string())
        })
        .collect();

    let mut articles = Vec::with_capacity(headers.len());
    for (i, (_, segment_start, token)) in headers.iter().enumerate() {
        let segment_end = headers.get(i + 1).map(|h| h.0).unwrap_or(text.len());
        let segment = &text[*segment_start..segment_end];

        let headline =
            capture(&HEADLINE, segment).unwrap_or_else(|| NO_HEADLINE.to_string());
        let body = capture(&BODY, segment)
            .map(|raw| WHITESPACE.replace_all(&raw, " ").trim().to_string())
            .unwrap_or_else(|| NO_BODY.to_string());
        let author = capture(&AUTHOR, segment).unwrap_or_else(|| NO_AUTHOR.to_string());

        let image_url = find_image(&root, &headline);
        let date = dates::parse(token);
        let slug = slugify(&headline);

        articles.push(Article {
            id: format!("{}-{}", slug, date.timestamp()),
            date,
            date_raw: token.clone(),
            headline,
            body,
            author,
            image_url,
            slug,
            origin: ArticleOrigin::Remote,
        });
    }

    gaceta_core::types::sort_newest_first(&mut articles);
    articles
}

/// The published page nests everything under `#contents`; some exports use
/// `#doc-content` instead.
fn content_root<'a>(document: &'a Html) -> Option<ElementRef<'a>> {
    let primary = Selector::parse("#contents").unwrap();
    let fallback = Selector::parse("#doc-content").unwrap();
    document
        .select(&primary)
        .next()
        .or_else(|| document.select(&fallback).next())
}

fn capture(re: &Regex, segment: &str) -> Option<String> {
    re.captures(segment).map(|caps| caps[1].trim().to_string())
}

/// Locates the image for an article. Primary strategy: the paragraph that
/// carries both the headline and the `Image:` marker. Fallback: the first
/// Drive link anywhere in the container, which in multi-image documents can
/// attach another article's image (known lenient behavior, kept as is).
fn find_image(root: &ElementRef<'_>, headline: &str) -> Option<String> {
    let paragraphs = Selector::parse("p").unwrap();
    for paragraph in root.select(&paragraphs) {
        let text = paragraph.text().collect::<String>();
        if text.contains(headline) && text.contains("Image:") {
            if let Some(link) = DRIVE_LINK.find(&paragraph.inner_html()) {
                return Some(resolve_link(link.as_str()));
            }
        }
    }
    DRIVE_LINK
        .find(&root.inner_html())
        .map(|link| resolve_link(link.as_str()))
}

fn resolve_link(raw: &str) -> String {
    let unescaped = html_escape::decode_html_entities(raw);
    drive::resolve(&unescaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaceta_core::ArticleOrigin;

    fn wrap(inner: &str) -> String {
        format!(
            r#"<html><body><div id="contents">{}</div></body></html>"#,
            inner
        )
    }

    #[test]
    fn test_single_well_formed_segment() {
        let html = wrap(
            "<p>News 1 (05/01/2025): Headline: Storm hits coast Image: none \
             Body: Heavy rain fell. Author: J. Doe</p>",
        );
        let articles = parse_document(&html);
        assert_eq!(articles.len(), 1);

        let article = &articles[0];
        assert_eq!(article.date_raw, "05/01/2025");
        assert_eq!(article.headline, "Storm hits coast");
        assert_eq!(article.body, "Heavy rain fell.");
        assert_eq!(article.author, "J. Doe");
        assert_eq!(article.slug, "storm-hits-coast");
        assert_eq!(article.origin, ArticleOrigin::Remote);
        assert!(article.image_url.is_none());
    }

    #[test]
    fn test_segments_sorted_newest_first_with_nonempty_slugs() {
        let html = wrap(
            "<p>News 1 (05/01/2025): Headline: Older story Image: x Body: a Author: A</p>\
             <p>News 2 (07/01/2025): Headline: Newest story Image: x Body: b Author: B</p>\
             <p>News 3 (06/01/2025): Headline: Middle story Image: x Body: c Author: C</p>",
        );
        let articles = parse_document(&html);
        assert_eq!(articles.len(), 3);
        let slugs: Vec<&str> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest-story", "middle-story", "older-story"]);
        assert!(articles.iter().all(|a| !a.slug.is_empty()));
    }

    #[test]
    fn test_missing_body_marker_degrades_to_placeholder() {
        let html = wrap(
            "<p>News 1 (05/01/2025): Headline: Quiet day Image: x Author: A</p>\
             <p>News 2 (04/01/2025): Headline: Busy day Image: x Body: Much happened. Author: B</p>",
        );
        let articles = parse_document(&html);
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].body, "No content available");
        assert_eq!(articles[1].body, "Much happened.");
    }

    #[test]
    fn test_missing_headline_and_author_markers() {
        let html = wrap("<p>News 1 (05/01/2025): Body: Something happened.</p>");
        let articles = parse_document(&html);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].headline, "No headline");
        assert_eq!(articles[0].author, "Unknown author");
        assert_eq!(articles[0].body, "Something happened.");
    }

    #[test]
    fn test_body_whitespace_collapses() {
        let html = wrap(
            "<p>News 1 (05/01/2025): Headline: Storm Image: x Body: Heavy   rain\n \
             fell  overnight. Author: A</p>",
        );
        let articles = parse_document(&html);
        assert_eq!(articles[0].body, "Heavy rain fell overnight.");
    }

    #[test]
    fn test_no_content_container_yields_empty() {
        let html = r#"<html><body><div id="other"><p>News 1 (05/01/2025):</p></div></body></html>"#;
        assert!(parse_document(html).is_empty());
    }

    #[test]
    fn test_fallback_container_id() {
        let html = r#"<html><body><div id="doc-content">
            <p>News 1 (05/01/2025): Headline: Storm Image: x Body: Rain. Author: A</p>
            </div></body></html>"#;
        assert_eq!(parse_document(html).len(), 1);
    }

    #[test]
    fn test_document_without_markers_yields_empty() {
        let html = wrap("<p>Nothing newsworthy here.</p>");
        assert!(parse_document(&html).is_empty());
    }

    #[test]
    fn test_image_from_headline_paragraph() {
        let html = wrap(
            r#"<p>News 1 (05/01/2025): Headline: Storm hits coast Image: <a href="https://drive.google.com/file/d/abc123/view?usp=sharing">photo</a></p>
               <p>Body: Rain. Author: A</p>"#,
        );
        let articles = parse_document(&html);
        assert_eq!(
            articles[0].image_url.as_deref(),
            Some("https://drive.google.com/uc?export=view&id=abc123")
        );
    }

    #[test]
    fn test_image_falls_back_to_first_drive_link_in_document() {
        let html = wrap(
            r#"<p>News 1 (05/01/2025): Headline: Storm hits coast Image: pending</p>
               <p>Body: Rain. Author: A</p>
               <p>archive: <a href="https://drive.google.com/file/d/other9/view">old photo</a></p>"#,
        );
        let articles = parse_document(&html);
        assert_eq!(
            articles[0].image_url.as_deref(),
            Some("https://drive.google.com/uc?export=view&id=other9")
        );
    }

    #[test]
    fn test_image_link_entities_are_unescaped() {
        let html = wrap(
            r#"<p>News 1 (05/01/2025): Headline: Storm Image: <a href="https://drive.google.com/file/d/abc123/view?usp=sharing&amp;rtpof=true">photo</a> Body: Rain. Author: A</p>"#,
        );
        let articles = parse_document(&html);
        assert_eq!(
            articles[0].image_url.as_deref(),
            Some("https://drive.google.com/uc?export=view&id=abc123")
        );
    }

    #[test]
    fn test_remote_id_derives_from_slug_and_timestamp() {
        let html = wrap("<p>News 1 (05/01/2025): Headline: Storm Image: x Body: Rain. Author: A</p>");
        let articles = parse_document(&html);
        let expected = format!("storm-{}", articles[0].date.timestamp());
        assert_eq!(articles[0].id, expected);
    }
}
