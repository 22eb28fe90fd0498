use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new("[^a-z0-9]+").unwrap();
}

/// Derives the URL-path identifier for an article from its headline.
///
/// ASCII-only folding: accented and non-Latin letters collapse into hyphens
/// along with punctuation. Headlines without any ASCII alphanumerics come
/// out empty, which leaves the article unroutable.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_ALNUM.replace_all(&lowered, "-");
    hyphenated.trim_matches('-').chars().take(50).collect()
}
