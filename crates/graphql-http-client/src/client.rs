use http::{header, HeaderValue, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    fetch::Fetcher,
    hooks::{HttpRequest, RequestHook},
    request::Request,
    response, Error,
};

/// Sends GraphQL operations to a single endpoint.
///
/// The client keeps no per-call state, so one instance can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    fetcher: Fetcher,
    url: String,
    hooks: Vec<RequestHook>,
}

impl GraphqlClient {
    /// Creates a client posting to `url`. Nothing is validated until the first call.
    pub fn new(fetcher: Fetcher, url: impl Into<String>, hooks: Vec<RequestHook>) -> Self {
        GraphqlClient {
            fetcher,
            url: url.into(),
            hooks,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts `query` with `variables` and decodes the response `data` into `target`.
    ///
    /// `hooks` run after the client's own hooks and only for this call. The body is decoded
    /// before the status is checked: a malformed body reports [`Error::Decode`] whatever the
    /// status, and a non-success status with a valid body still populates `target` before
    /// [`Error::Status`] is returned.
    ///
    /// Dropping the returned future cancels the call.
    pub async fn execute<T>(
        &self,
        query: &str,
        variables: impl serde::Serialize,
        target: &mut T,
        hooks: &[RequestHook],
    ) -> Result<(), Error>
    where
        T: DeserializeOwned,
    {
        let mut request = self.new_request(query, variables, hooks)?;
        request
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(
            url = %self.url,
            hooks = self.hooks.len() + hooks.len(),
            "sending GraphQL request"
        );

        let resp = self.fetcher.send(request).await?;
        let status = resp.status();

        response::decode_into(resp.body(), target).map_err(Error::Decode)?;

        if !status.is_success() {
            tracing::debug!(url = %self.url, %status, "GraphQL request failed");
            return Err(Error::Status(status));
        }

        Ok(())
    }

    fn new_request(
        &self,
        query: &str,
        variables: impl serde::Serialize,
        hooks: &[RequestHook],
    ) -> Result<HttpRequest, Error> {
        let body = Request::new(query, variables)?.to_body()?;
        let url = Url::parse(&self.url)?;

        let mut request = http::Request::builder()
            .method(Method::POST)
            .uri(url.as_str())
            .body(body)?;

        for hook in self.hooks.iter().chain(hooks) {
            hook.apply(&mut request);
        }

        Ok(request)
    }
}
