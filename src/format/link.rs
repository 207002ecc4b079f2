//! URL display helpers.

use crate::model::WorkEntry;

/// Code-hosting domain recognized by [`display_handle`].
const CODE_HOST: &str = "github.com";

/// Strip a leading `https://` or `http://` for display.
///
/// Link targets keep the original URL; only the visible text is shortened.
pub fn shorten_url(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Guess a short display handle for an employer.
///
/// A GitHub organization URL gives `@<last path segment>`; anything else
/// gives the lowercased employer name with whitespace removed plus `.com`.
/// This is a heuristic and never fails.
pub fn display_handle(work: &WorkEntry) -> String {
    match work.url.as_deref() {
        Some(url) if url.contains(CODE_HOST) => {
            let org = url.rsplit('/').next().unwrap_or_default();
            format!("@{}", org)
        }
        _ => {
            let compact: String = work
                .name
                .to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            format!("{}.com", compact)
        }
    }
}
