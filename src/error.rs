use thiserror::Error;
use tokio::sync::mpsc;

use crate::listing::Listing;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The field you are trying to scrape is missing. Selector: {selector}, index: {index}")]
    FieldNotFound { selector: String, index: usize },
    #[error("Couldn't make sense of the value for {field}: {raw:?}")]
    MalformedValue { field: &'static str, raw: String },
    #[error("Precondition violated: {0}")]
    PreconditionViolated(&'static str),
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
    #[error("Couldn't send a listing through a channel.")]
    RuntimeSendError,

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("Request to {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl Error {
    pub(crate) fn malformed(field: &'static str, raw: &str) -> Self {
        Error::MalformedValue {
            field,
            raw: raw.to_string(),
        }
    }
}

impl From<mpsc::error::SendError<Listing>> for Error {
    fn from(_value: mpsc::error::SendError<Listing>) -> Self {
        Error::RuntimeSendError
    }
}
