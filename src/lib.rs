//! Scraper for suumo.jp rental listings.
//!
//! Fetches a listing page and its map page, pulls out rent, fees, layout,
//! access and coordinates, and normalizes them into a [`Listing`].

mod error;
mod macros;
mod request;

pub mod coordinates;
pub mod fees;
pub mod listing;
pub mod locate;
pub mod normalize;
pub mod process;
pub mod source;
pub mod stations;
pub mod suumo;

pub use error::{Error, Result};
pub use listing::Listing;
pub use request::{fetch_documents, Clients, Documents};
pub use source::ListingSource;
pub use suumo::SuumoScraper;

/// Sent with every request so the site serves the same page a browser gets.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_10_1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/39.0.2171.95 Safari/537.36";
/// Appended to a listing URL to reach its map page.
const MAP_SUBPATH: &str = "kankyo/";
const FILE_PATH: &str = "suumo_listings.tsv";
/// Scraped when no URL is given on the command line.
pub const DEFAULT_LISTING_URL: &str = "https://suumo.jp/chintai/bc_100296177140/";
