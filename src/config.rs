use std::path::PathBuf;

use crate::{DEFAULT_SEED_URL, FILE_PATH, PAGE_LIMIT};

/// Settings for a single fetch run.
///
/// `Config::default()` reproduces the stock run: the compiled-in seed URL,
/// output to `data/news.json`, no request limit and no visited-URL guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First URL put on the pagination queue.
    pub seed_url: String,
    /// File the aggregate document is written to. Overwritten on every run.
    pub output_path: PathBuf,
    /// Maximum number of requests to issue, 0 means unlimited.
    pub page_limit: usize,
    /// Skip URLs that were already fetched during this run.
    pub skip_visited: bool,
    /// Sent as the `User-Agent` header when set.
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            output_path: PathBuf::from(FILE_PATH),
            page_limit: PAGE_LIMIT,
            skip_visited: false,
            user_agent: None,
        }
    }
}

impl Config {
    pub fn with_seed_url(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            ..Self::default()
        }
    }

    /// `None` when requests are unlimited.
    pub(crate) fn request_limit(&self) -> Option<usize> {
        (self.page_limit > 0).then_some(self.page_limit)
    }
}
