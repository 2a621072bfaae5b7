//! Follows the `pagination` links of a JSON search API, collects every post
//! it returns and saves them in a single JSON document.

mod config;
mod document;
mod error;
mod macros;
pub mod process;
pub mod request;

pub use config::Config;
pub use document::NewsDocument;
pub use error::{Error, Result};

const DEFAULT_SEED_URL: &str = "https://backend-kemenag-batubara.vercel.app/api/search?keyword=batu+bara";
const FILE_PATH: &str = "data/news.json";
/// If set to 0 there is no limit on the number of requests.
const PAGE_LIMIT: usize = 0;
