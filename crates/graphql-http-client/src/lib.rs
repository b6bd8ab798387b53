//! A small GraphQL-over-HTTP client.
//!
//! Each call serializes the query and its variables into a JSON body, POSTs it to the configured
//! endpoint through a [`Fetcher`], and decodes the `data` field of the JSON response into a
//! caller-provided target. There is no retry, batching or caching: every failure is returned as
//! an [`Error`] as soon as it happens.
//!
//! ```no_run
//! # async fn run() -> Result<(), graphql_http_client::Error> {
//! use graphql_http_client::{Fetcher, GraphqlClient, RequestHook};
//!
//! #[derive(Default, serde::Deserialize)]
//! struct Ping {
//!     ping: String,
//! }
//!
//! let client = GraphqlClient::new(
//!     Fetcher::native(reqwest::Client::new()),
//!     "https://api.example.com/graphql",
//!     vec![RequestHook::bearer_auth("token").expect("valid token")],
//! );
//!
//! let mut out = Ping::default();
//! client.execute("{ ping }", (), &mut out, &[]).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
pub mod fetch;
mod hooks;
mod request;
pub mod response;

pub use client::GraphqlClient;
pub use config::{ClientConfig, ConfigError};
pub use error::Error;
pub use fetch::{FetchError, FetchResult, Fetcher, FetcherInner, NativeFetcher};
pub use hooks::{HttpRequest, RequestHook};
pub use request::Request;
