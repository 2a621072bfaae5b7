use chrono::Local;
use news_fetch::{info_time, process::process_site, Config, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    process_site(&Config::default()).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
