use chrono::Local;
use suumo_scrap::{info_time, process::process_listings, Result, DEFAULT_LISTING_URL};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();

    let mut urls = std::env::args().skip(1).collect::<Vec<_>>();
    if urls.is_empty() {
        urls.push(DEFAULT_LISTING_URL.to_string());
    }
    process_listings(urls).await?;
    info_time!(start_time, "Full program time:");

    Ok(())
}
