//! Incremental URL extraction.
//!
//! Links are scanned on the start-line content and re-scanned over the full
//! accumulated content every time a continuation line arrives, so a URL
//! split across lines is still caught once the pieces join. Re-scanning
//! re-finds earlier links, which is why collection de-duplicates while
//! preserving first-seen order.

use regex::Regex;

/// Scans content for `http://` / `https://` URLs.
#[derive(Debug, Clone)]
pub(crate) struct LinkScanner {
    pattern: Regex,
}

impl LinkScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"https?://\S+").unwrap(),
        }
    }

    /// Appends every URL found in `content` to `links`, skipping ones
    /// already present.
    pub fn collect_into(&self, content: &str, links: &mut Vec<String>) {
        for found in self.pattern.find_iter(content) {
            if !links.iter().any(|l| l == found.as_str()) {
                links.push(found.as_str().to_string());
            }
        }
    }
}
