use bytes::Bytes;

use super::{FetchResult, FetcherInner};

/// Sends requests through a shared [`reqwest::Client`].
///
/// Pooling, TLS and timeouts are whatever the client was built with.
#[derive(Clone, Debug)]
pub struct NativeFetcher {
    client: reqwest::Client,
}

impl NativeFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        NativeFetcher { client }
    }
}

impl Default for NativeFetcher {
    fn default() -> Self {
        NativeFetcher::new(reqwest::Client::new())
    }
}

#[async_trait::async_trait]
impl FetcherInner for NativeFetcher {
    async fn send(&self, request: http::Request<Bytes>) -> FetchResult<http::Response<Bytes>> {
        let request = reqwest::Request::try_from(request)?;

        let mut resp = self.client.execute(request).await?;

        let status = resp.status();
        let headers = std::mem::take(resp.headers_mut());
        let version = resp.version();
        let bytes = resp.bytes().await?;

        let mut response = http::Response::new(bytes);
        *response.status_mut() = status;
        *response.version_mut() = version;
        *response.headers_mut() = headers;

        Ok(response)
    }
}
