use scraper::Html;

use crate::locate::{create_selector, element_text, nth_element};
use crate::normalize::strip_decoration;
use crate::Result;

const DETAIL_BODY: &str = "div.property_view_detail-body";
const DETAIL_TEXT: &str = "div.property_view_detail-text";
/// The access block is the third detail block on the page.
const ACCESS_BLOCK_INDEX: usize = 2;

/// Joins station fragments with newlines, skipping blank ones.
pub fn join_stations<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(strip_decoration)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists the nearest stations, one per line.
pub fn extract_stations(document: &Html) -> Result<String> {
    let access_block = nth_element(document, DETAIL_BODY, ACCESS_BLOCK_INDEX)?;
    let text_selector = create_selector(DETAIL_TEXT)?;
    let stations = access_block
        .select(&text_selector)
        .map(element_text)
        .collect::<Vec<_>>();
    Ok(join_stations(stations.iter().map(String::as_str)))
}
