use reqwest::{redirect::Policy, Client};

use crate::source::ListingSource;
use crate::{info_time, Error, Result, USER_AGENT};

/// HTTP clients for one scraping run.
/// The supplementary page must not follow redirects, so it gets its own client.
#[derive(Clone)]
pub struct Clients {
    main: Client,
    supplementary: Client,
}

impl Clients {
    pub fn new() -> Result<Self> {
        let main = Client::builder().user_agent(USER_AGENT).build()?;
        let supplementary = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .build()?;
        Ok(Self {
            main,
            supplementary,
        })
    }
}

/// Raw HTML of a listing page and its supplementary page.
#[derive(Debug, Clone)]
pub struct Documents {
    pub main_html: String,
    pub supplementary_html: String,
}

/// Requests both pages a source `S` needs for the listing at `url`.
pub async fn fetch_documents<S: ListingSource>(clients: &Clients, url: &str) -> Result<Documents> {
    info_time!("Requesting listing: {url}");
    let main_html = request_page_html(&clients.main, url).await?;

    let supplementary_url = S::supplementary_url(url);
    info_time!("Requesting supplementary page: {supplementary_url}");
    let supplementary_html = request_page_html(&clients.supplementary, &supplementary_url).await?;

    Ok(Documents {
        main_html,
        supplementary_html,
    })
}

/// Requests a page and returns a `Result<String>` containing the HTML.
async fn request_page_html(client: &Client, url: &str) -> Result<String> {
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let html = res.text().await?;
    Ok(html)
}
