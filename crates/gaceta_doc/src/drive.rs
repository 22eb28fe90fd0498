use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

const DRIVE_HOST: &str = "drive.google.com";

lazy_static! {
    static ref FILE_SEGMENT: Regex = Regex::new(r"/file/d/([A-Za-z0-9_-]+)").unwrap();
}

/// Extracts the Drive file id from either link shape: the `/file/d/<id>`
/// viewer path or the `id=<id>` query of an already-resolved export URL.
pub fn file_id(url: &str) -> Option<String> {
    if let Some(caps) = FILE_SEGMENT.captures(url) {
        return Some(caps[1].to_string());
    }
    Url::parse(url)
        .ok()?
        .query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.to_string())
}

/// Rewrites a Drive "file view" link into a directly embeddable export URL.
/// Non-Drive URLs, and Drive URLs with no recognizable file segment, pass
/// through unchanged.
pub fn resolve(url: &str) -> String {
    if !url.contains(DRIVE_HOST) {
        return url.to_string();
    }
    match FILE_SEGMENT.captures(url) {
        Some(caps) => format!("https://{}/uc?export=view&id={}", DRIVE_HOST, &caps[1]),
        None => url.to_string(),
    }
}

/// Alternate image host for a Drive file, tried once when the export URL
/// refuses to load.
pub fn alternate_url(id: &str) -> String {
    format!("https://lh3.googleusercontent.com/d/{}", id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Unresolved,
    Loaded,
    FailedRetry,
    FailedFinal,
}

/// Image degrade chain for the presentation layer: the export URL, then the
/// alternate host keyed by the same file id, then no image at all.
///
/// States progress `Unresolved -> Loaded | FailedRetry` and
/// `FailedRetry -> Loaded | FailedFinal`.
#[derive(Debug, Clone)]
pub struct ImageLoad {
    status: ImageStatus,
    url: String,
    file_id: Option<String>,
}

impl ImageLoad {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let file_id = file_id(&url);
        Self {
            status: ImageStatus::Unresolved,
            url,
            file_id,
        }
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }

    /// URL the renderer should try next; `None` once the chain is exhausted.
    pub fn current_url(&self) -> Option<&str> {
        match self.status {
            ImageStatus::FailedFinal => None,
            _ => Some(&self.url),
        }
    }

    pub fn mark_loaded(&mut self) {
        if self.status != ImageStatus::FailedFinal {
            self.status = ImageStatus::Loaded;
        }
    }

    pub fn mark_failed(&mut self) {
        self.status = match (self.status, &self.file_id) {
            (ImageStatus::Unresolved, Some(id)) => {
                self.url = alternate_url(id);
                ImageStatus::FailedRetry
            }
            // No file id means no alternate to try.
            (ImageStatus::Unresolved, None) => ImageStatus::FailedFinal,
            (ImageStatus::Loaded, _) => ImageStatus::Loaded,
            _ => ImageStatus::FailedFinal,
        };
    }
}
