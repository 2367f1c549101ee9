use crate::title::ARTICLE_PATH;
use url::Url;

/// Namespaces that hold non-article content. Matched case-sensitively.
pub const RESERVED_NAMESPACES: [&str; 8] = [
    "Help:",
    "Wikipedia:",
    "Special:",
    "Talk:",
    "File:",
    "Template:",
    "Category:",
    "Portal:",
];

/// Marker found in hrefs that point at in-page citations
const CITATION_MARKER: &str = "#cite";

/// Why an href was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefRejection {
    /// Not an internal article path
    External,
    /// Points into one of the reserved namespaces
    ReservedNamespace,
    /// Fragment-only reference or citation anchor
    Citation,
}

/// Classifies anchor hrefs as followable article links or not
#[derive(Debug, Clone)]
pub struct LinkFilter {
    reserved_prefixes: Vec<String>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            reserved_prefixes: RESERVED_NAMESPACES
                .iter()
                .map(|ns| format!("{ARTICLE_PATH}{ns}"))
                .collect(),
        }
    }
}

impl LinkFilter {
    /// Check an href against the article rules, returning the reason it fails if any
    pub fn check(&self, href: &str) -> Result<(), HrefRejection> {
        if !href.starts_with(ARTICLE_PATH) {
            return Err(HrefRejection::External);
        }

        if self
            .reserved_prefixes
            .iter()
            .any(|prefix| href.starts_with(prefix.as_str()))
        {
            return Err(HrefRejection::ReservedNamespace);
        }

        if href.contains(CITATION_MARKER) || href.starts_with('#') {
            return Err(HrefRejection::Citation);
        }

        Ok(())
    }
}

/// Resolve an accepted href against the base origin
pub fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    match base.join(href) {
        Ok(url) => Some(url),
        Err(e) => {
            ::log::debug!("Could not resolve href {} against {}: {}", href, base, e);
            None
        }
    }
}
