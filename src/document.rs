use serde::Serialize;
use serde_json::Value;

/// The aggregate written at the end of a run.
///
/// `total_posts` always equals `posts.len()` and `pagination` is always empty,
/// which is why the fields are only reachable through [`NewsDocument::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsDocument {
    posts: Vec<Value>,
    pagination: Vec<String>,
    total_posts: usize,
    scraped_url: String,
}

impl NewsDocument {
    pub fn new(posts: Vec<Value>, seed_url: impl Into<String>) -> Self {
        Self {
            total_posts: posts.len(),
            posts,
            pagination: Vec::new(),
            scraped_url: seed_url.into(),
        }
    }

    pub fn posts(&self) -> &[Value] {
        &self.posts
    }

    pub fn total_posts(&self) -> usize {
        self.total_posts
    }

    pub fn scraped_url(&self) -> &str {
        &self.scraped_url
    }

    /// Pretty JSON with a 4 space indent. Non-ASCII text is left unescaped.
    pub fn to_pretty_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(128 * self.posts.len() + 128);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}
