use std::collections::{HashSet, VecDeque};
use std::path::Path;

use chrono::Local;
use reqwest::Client;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::request::request_page;
use crate::{info_time, Config, Error, NewsDocument, Result};

/// Why the pagination loop ended.
#[derive(Debug)]
pub enum Termination {
    /// The queue ran empty.
    Exhausted,
    /// A request or its decoding failed. Everything fetched before `url` is kept.
    Stopped { url: String, error: Error },
    /// `Config::page_limit` requests were issued with URLs still queued.
    PageLimit { queued: usize },
}

#[derive(Debug)]
pub struct FetchReport {
    pub document: NewsDocument,
    /// Number of requests issued, including a failed last one.
    pub requests: usize,
    pub termination: Termination,
}

impl FetchReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.termination, Termination::Exhausted)
    }
}

/// Fetches every page reachable from the seed URL, writes the document and returns the report.
/// Only a failed write is an error, fetch failures end up in `FetchReport::termination`.
pub async fn process_site(config: &Config) -> Result<FetchReport> {
    let start_time = Local::now();
    let client = build_client(config)?;

    info_time!("Started fetching from {}", config.seed_url);
    let report = fetch_all(&client, config).await;
    info_time!(
        start_time,
        "Finished fetching: {} requests, {} posts.",
        report.requests,
        report.document.total_posts()
    );

    let path = config.output_path.as_path();
    write_document(path, &report.document).await?;
    info_time!(
        "Saved {} posts to {}",
        report.document.total_posts(),
        path.display()
    );

    Ok(report)
}

/// Runs the pagination loop. URLs are taken from the front of the queue and the
/// links each page returns are appended to the back, so pages are visited in discovery order.
/// The first failing request stops the loop.
pub async fn fetch_all(client: &Client, config: &Config) -> FetchReport {
    let mut queue = VecDeque::from([config.seed_url.clone()]);
    let mut visited = HashSet::new();
    let mut posts = Vec::new();
    let mut requests = 0;

    let termination = loop {
        if config.skip_visited {
            while queue.front().is_some_and(|url| visited.contains(url)) {
                queue.pop_front();
            }
        }
        if config.request_limit().is_some_and(|limit| requests >= limit) {
            let queued = pending_urls(&queue, &visited, config.skip_visited);
            if queued > 0 {
                info_time!("Reached the limit of {} requests, {} URLs left.", requests, queued);
                break Termination::PageLimit { queued };
            }
            break Termination::Exhausted;
        }

        let Some(url) = queue.pop_front() else {
            break Termination::Exhausted;
        };
        if config.skip_visited {
            visited.insert(url.clone());
        }

        requests += 1;
        match request_page(client, &url).await {
            Ok(page) => {
                let source = page.scraped_url.as_deref().unwrap_or(&url);
                info_time!("{}", fetched_line(page.posts.len(), source));
                posts.extend(page.posts);
                queue.extend(page.pagination);
            }
            Err(error) => {
                info_time!("{}", error_line(&url, &error));
                break Termination::Stopped { url, error };
            }
        }
    };

    FetchReport {
        document: NewsDocument::new(posts, config.seed_url.as_str()),
        requests,
        termination,
    }
}

/// Overwrites `path` with the pretty printed document.
/// The parent directory has to exist already.
pub async fn write_document(path: &Path, document: &NewsDocument) -> Result<()> {
    let bytes = document.to_pretty_bytes()?;
    let mut file = File::create(path).await?;
    file.write_all(&bytes).await?;
    file.flush().await?;
    Ok(())
}

/// Distinct URLs still worth requesting.
fn pending_urls(queue: &VecDeque<String>, visited: &HashSet<String>, skip_visited: bool) -> usize {
    if !skip_visited {
        return queue.len();
    }
    queue
        .iter()
        .filter(|url| !visited.contains(*url))
        .collect::<HashSet<_>>()
        .len()
}

fn fetched_line(count: usize, source: &str) -> String {
    format!("Fetched {count} posts from {source}")
}

fn error_line(url: &str, error: &Error) -> String {
    format!("Error fetching {url}: {error}")
}

fn build_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    Ok(builder.build()?)
}
