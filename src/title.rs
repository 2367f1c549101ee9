use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Path prefix shared by every article URL
pub const ARTICLE_PATH: &str = "/wiki/";

/// Characters escaped when a title becomes a path. `/` stays literal since titles use it
/// for subpages, `%` is escaped so decoded titles survive the trip back.
const TITLE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Decoded, namespace-free title naming one article.
///
/// Titles compare by exact string equality, which is what cycle detection relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageTitle(String);

impl PageTitle {
    /// Build a title from free text, trimming it and using underscores for spaces
    /// the way article paths spell them.
    ///
    /// Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.replace(' ', "_")))
    }

    /// Extract the title from an article URL.
    ///
    /// Takes the path segment following the last `/wiki/` and percent-decodes it.
    /// URLs without an article path, or with an empty title, yield `None`.
    pub fn from_url(url: &Url) -> Option<Self> {
        let path = url.path();
        if !path.contains(ARTICLE_PATH) {
            return None;
        }

        let encoded = path.rsplit(ARTICLE_PATH).next()?;
        let decoded = percent_decode_str(encoded).decode_utf8_lossy();
        if decoded.is_empty() {
            return None;
        }
        Some(Self(decoded.into_owned()))
    }

    /// Article URL for this title under `base`. The title is percent-encoded as needed.
    pub fn article_url(&self, base: &Url) -> Url {
        let encoded = utf8_percent_encode(&self.0, TITLE_ENCODE_SET);
        let mut url = base.clone();
        url.set_path(&format!("{}{}", ARTICLE_PATH, encoded));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
