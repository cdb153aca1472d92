//! URL construction for the JustCMS public API.
//!
//! Every URL is `{base}/{project}[/{segment}...][?{query}]`. Each segment is
//! percent-encoded on its own, so a slug or id can't escape its segment:
//! `/` is encoded, and a `.` or `..` segment is sent encoded instead of
//! being resolved away. Query values are form-encoded.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{form_urlencoded, Url};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.justcms.co/public";

/// Ordered query parameters. Keys pushed with `None` are dropped, so an
/// absent value never reaches the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Characters escaped inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Parse and check a base URL. It must be able to carry path segments.
/// Any query or fragment on it is discarded.
pub fn parse_base_url(base: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(base.trim_end_matches('/'))
        .map_err(|_| ConfigError::InvalidBaseUrl(base.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl(base.to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// Build the full URL for `segments` under `project`.
///
/// No segments addresses the project root. The path is assembled as text
/// rather than through `Url`, which would drop dot segments.
pub fn build_url(base: &Url, project: &str, segments: &[&str], query: &Query) -> String {
    let mut url = base.as_str().trim_end_matches('/').to_string();
    for segment in std::iter::once(&project).chain(segments) {
        url.push('/');
        url.push_str(&encode_segment(segment));
    }
    if !query.is_empty() {
        url.push('?');
        url.push_str(
            &form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.pairs())
                .finish(),
        );
    }
    url
}

fn encode_segment(segment: &str) -> Cow<'_, str> {
    match segment {
        "." => Cow::Borrowed("%2E"),
        ".." => Cow::Borrowed("%2E%2E"),
        _ => utf8_percent_encode(segment, SEGMENT).into(),
    }
}
