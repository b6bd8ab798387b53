use http::StatusCode;

use crate::fetch::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid GraphQL endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("could not build the HTTP request: {0}")]
    Request(#[from] http::Error),

    #[error("could not complete request to GraphQL server: {0}")]
    Transport(#[from] FetchError),

    #[error("could not decode the GraphQL response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("http status code: {}", .0.as_u16())]
    Status(StatusCode),
}

impl Error {
    /// The numeric HTTP status of a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status(status) => Some(status.as_u16()),
            _ => None,
        }
    }
}
