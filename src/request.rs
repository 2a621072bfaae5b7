use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::Result;

/// One decoded page of search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub posts: Vec<Value>,
    /// Follow-up URLs, in the order the API listed them.
    pub pagination: Vec<String>,
    /// Only used for the progress line. A page without it is still accepted,
    /// the requested URL is reported instead.
    #[serde(default)]
    pub scraped_url: Option<String>,
}

/// Requests a page and decodes the JSON body.
/// Non-success statuses, malformed JSON and a missing `posts` or `pagination` key are all errors.
pub async fn request_page(client: &Client, url: &str) -> Result<Page> {
    let res = client.get(url).send().await?.error_for_status()?;
    let body = res.text().await?;
    let page = serde_json::from_str(&body)?;
    Ok(page)
}
