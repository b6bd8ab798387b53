mod native;

use std::sync::Arc;

use bytes::Bytes;

pub use native::NativeFetcher;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Message(String),
}

impl FetchError {
    pub fn any(error: impl ToString) -> Self {
        FetchError::Message(error.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// The HTTP capability a [`GraphqlClient`](crate::GraphqlClient) sends its requests through.
///
/// Implementations own connection management, TLS and redirects. The response body is
/// returned fully buffered.
#[async_trait::async_trait]
pub trait FetcherInner: Send + Sync {
    async fn send(&self, request: http::Request<Bytes>) -> FetchResult<http::Response<Bytes>>;
}

/// A cheaply clonable handle to a shared transport.
#[derive(Clone)]
pub struct Fetcher {
    inner: Arc<dyn FetcherInner>,
}

impl Fetcher {
    pub fn new(fetcher: impl FetcherInner + 'static) -> Fetcher {
        Fetcher {
            inner: Arc::new(fetcher),
        }
    }

    /// A fetcher backed by the given reqwest client.
    pub fn native(client: reqwest::Client) -> Fetcher {
        Fetcher::new(NativeFetcher::new(client))
    }
}

impl std::ops::Deref for Fetcher {
    type Target = dyn FetcherInner;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher").finish_non_exhaustive()
    }
}
