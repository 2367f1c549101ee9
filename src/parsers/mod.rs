pub mod html;

#[cfg(test)]
mod tests;

use url::Url;

pub use html::ArticleLinkExtractor;

/// An outbound link judged eligible to follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCandidate {
    /// Absolute link target
    pub url: Url,
    /// Visible text of the source anchor
    pub text: String,
    /// Tag names enclosing the anchor, innermost first, up to and including its paragraph
    pub context: Vec<String>,
}

impl LinkCandidate {
    pub fn new(url: Url, text: impl Into<String>) -> Self {
        Self {
            url,
            text: text.into(),
            context: Vec::new(),
        }
    }

    /// Attach the enclosing tag names
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }
}

/// Picks the links a reader would click first from a fetched page.
///
/// Implementations must be pure: the same content and `max_links` always give the same
/// ordered result. An empty vector means no usable link was found.
pub trait LinkExtractor {
    fn extract(&self, content: &str, max_links: usize) -> Vec<LinkCandidate>;
}
