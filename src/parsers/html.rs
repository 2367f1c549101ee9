use crate::filter::{LinkFilter, resolve_href};
use crate::parsers::{LinkCandidate, LinkExtractor};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#mw-content-text").expect("valid selector"));

static ARTICLE_BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.mw-parser-output").expect("valid selector"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));

const PARAGRAPH: &str = "p";
const EMPHASIS: [&str; 2] = ["i", "em"];

/// Extracts first-link candidates from the body of a rendered article
#[derive(Debug, Clone)]
pub struct ArticleLinkExtractor {
    base: Url,
    filter: LinkFilter,
}

impl ArticleLinkExtractor {
    /// Create an extractor that resolves hrefs against `base`
    pub fn new(base: Url) -> Self {
        Self {
            base,
            filter: LinkFilter::default(),
        }
    }

    /// Collect candidates from a single paragraph until `limit` is reached
    fn collect_from_paragraph(
        &self,
        paragraph: ElementRef<'_>,
        limit: usize,
        found: &mut Vec<LinkCandidate>,
    ) {
        let paragraph_text = paragraph.text().collect::<String>();

        for anchor in paragraph.select(&ANCHOR_SELECTOR) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            if let Err(reason) = self.filter.check(href) {
                ::log::trace!("Skipping {}: {:?}", href, reason);
                continue;
            }

            let context = ancestor_tags_within(anchor, PARAGRAPH);

            // Italic links are usually references to the article itself
            if context.iter().any(|tag| EMPHASIS.contains(&tag.as_str())) {
                ::log::debug!("Skipping italic link: {}", href);
                continue;
            }

            let link_text = anchor.text().collect::<String>();
            if is_parenthesized(&paragraph_text, &link_text) {
                ::log::debug!("Skipping parenthesized link: {}", href);
                continue;
            }

            let Some(url) = resolve_href(&self.base, href) else {
                continue;
            };
            found.push(LinkCandidate::new(url, link_text).with_context(context));

            if found.len() >= limit {
                return;
            }
        }
    }
}

impl LinkExtractor for ArticleLinkExtractor {
    fn extract(&self, content: &str, max_links: usize) -> Vec<LinkCandidate> {
        let mut found = Vec::new();
        if max_links == 0 {
            return found;
        }

        let doc = Html::parse_document(content);

        let Some(article_body) = doc
            .select(&CONTENT_SELECTOR)
            .next()
            .and_then(|region| region.select(&ARTICLE_BODY_SELECTOR).next())
        else {
            ::log::debug!("No article body found");
            return found;
        };

        for paragraph in article_body
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == PARAGRAPH)
        {
            if paragraph.text().all(|t| t.trim().is_empty()) {
                continue;
            }

            self.collect_from_paragraph(paragraph, max_links, &mut found);
            if found.len() >= max_links {
                break;
            }
        }

        ::log::debug!("Extractor found {} candidate links", found.len());
        found
    }
}

/// Names of the elements enclosing `element`, innermost first, stopping after the first
/// one called `boundary`.
pub fn ancestor_tags_within(element: ElementRef<'_>, boundary: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for node in element.ancestors() {
        let Some(el) = node.value().as_element() else {
            continue;
        };
        tags.push(el.name().to_string());
        if el.name() == boundary {
            break;
        }
    }
    tags
}

/// Text-level check for a link inside parentheses.
///
/// Looks for `link_text` anywhere between an opening parenthesis and the next closing one
/// in `paragraph_text`. Nested parentheses, or the same text appearing in an unrelated
/// parenthetical, make it misfire; callers depend on that exact behaviour.
pub fn is_parenthesized(paragraph_text: &str, link_text: &str) -> bool {
    let pattern = format!(r"\([^)]*{}[^)]*\)", regex::escape(link_text));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(paragraph_text),
        Err(e) => {
            ::log::debug!("Could not build parenthesis pattern: {}", e);
            false
        }
    }
}
