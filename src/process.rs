use chrono::Local;
use tokio::{fs::File, io::AsyncWriteExt, sync::mpsc, task::JoinSet};

use crate::listing::{Listing, TSV_HEADER};
use crate::request::{fetch_documents, Clients};
use crate::source::ListingSource;
use crate::suumo::SuumoScraper;
use crate::{info_time, warn_time, Result, FILE_PATH};

/// Scrapes every listing in `urls` and writes the results to `FILE_PATH`.
/// Each listing is scraped in its own task; a listing that fails is reported and skipped.
pub async fn process_listings(urls: Vec<String>) -> Result<()> {
    let start_time = Local::now();
    let clients = Clients::new()?;

    info_time!("Started scraping {} listings", urls.len());

    let (listing_tx, listing_rx) = mpsc::channel(64);
    let collect_handle = tokio::spawn(async move { collect_listings(listing_rx).await });

    let mut task_set = JoinSet::new();
    for url in urls {
        task_set.spawn({
            // Client uses Arc so we can clone cheaply
            let clients = clients.clone();
            let listing_tx = listing_tx.clone();
            async move {
                let listing = scrape_listing::<SuumoScraper>(&clients, &url).await;
                forward_listing(&url, listing, &listing_tx).await
            }
        });
    }
    // Only the tasks hold a sender now, so the collector stops once they are done.
    drop(listing_tx);

    while let Some(task) = task_set.join_next().await {
        task??;
    }
    info_time!(start_time, "Finished scraping all listings.");

    let listings = collect_handle.await??;
    let local_now = Local::now();
    let mut file = File::create(FILE_PATH).await?;
    file.write_all(TSV_HEADER.as_bytes()).await?;
    for listing in &listings {
        file.write_all(listing.to_tsv_row().as_bytes()).await?;
    }
    file.flush().await?;
    info_time!(local_now, "Wrote {} listings to file: {FILE_PATH}", listings.len());

    Ok(())
}

/// Fetches the pages of a single listing and scrapes them into a [`Listing`].
/// Parsing happens on a blocking thread, the parsed documents never cross an `.await`.
pub async fn scrape_listing<S>(clients: &Clients, url: &str) -> Result<Listing>
where
    S: ListingSource + 'static,
{
    let start_time = Local::now();
    let documents = fetch_documents::<S>(clients, url).await?;

    let url = url.to_string();
    let listing = tokio::task::spawn_blocking(move || -> Result<Listing> {
        let mut source = S::from_documents(
            &url,
            &documents.main_html,
            &documents.supplementary_html,
        )?;
        let mut listing = Listing::new(url.as_str());
        source.scrap_all(&mut listing)?;
        Ok(listing)
    })
    .await??;

    info_time!(start_time, "Scraped {}", listing.url);
    Ok(listing)
}

/// Sends a scraped listing on to the collector. A listing that failed is reported and dropped,
/// only a closed channel is an error.
async fn forward_listing(
    url: &str,
    listing: Result<Listing>,
    listing_tx: &mpsc::Sender<Listing>,
) -> Result<()> {
    match listing {
        Ok(listing) => listing_tx.send(listing).await?,
        Err(e) => warn_time!("Skipping {url}: {e}"),
    }
    Ok(())
}

/// Collects listings from the channel, printing each as it arrives.
/// Returns them sorted by URL so the output file is stable between runs.
async fn collect_listings(mut listing_rx: mpsc::Receiver<Listing>) -> Result<Vec<Listing>> {
    let mut col = Vec::new();

    while let Some(listing) = listing_rx.recv().await {
        println!("{listing}");
        col.push(listing);
    }

    col.sort_unstable_by(|a, b| a.url.cmp(&b.url));
    info_time!("Collected {} listings", col.len());
    Ok(col)
}
