use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use http::{
    header::{InvalidHeaderName, InvalidHeaderValue},
    HeaderName, HeaderValue,
};
use url::Url;

use crate::{fetch::Fetcher, hooks::RequestHook, GraphqlClient};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse the client configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid header name in the client configuration: {0}")]
    InvalidHeaderName(#[from] InvalidHeaderName),
    #[error("invalid header value in the client configuration: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// Settings for a [`GraphqlClient`], usually read from a TOML file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// The GraphQL endpoint
    pub url: Url,
    /// Static headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Sent as `Authorization: Bearer <token>`
    #[serde(default)]
    pub bearer_token: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&input)
    }

    /// Client-level hooks: static headers by name, then the bearer token, then the user agent.
    fn hooks(&self) -> Result<Vec<RequestHook>, ConfigError> {
        let mut hooks = Vec::with_capacity(self.headers.len() + 2);

        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str())?;
            let value = HeaderValue::try_from(value.as_str())?;
            hooks.push(RequestHook::header(name, value));
        }

        if let Some(token) = &self.bearer_token {
            hooks.push(RequestHook::bearer_auth(token)?);
        }

        if let Some(user_agent) = &self.user_agent {
            hooks.push(RequestHook::user_agent(HeaderValue::try_from(user_agent.as_str())?));
        }

        Ok(hooks)
    }
}

impl GraphqlClient {
    pub fn from_config(fetcher: Fetcher, config: &ClientConfig) -> Result<Self, ConfigError> {
        let hooks = config.hooks()?;
        tracing::debug!(url = %config.url, hooks = hooks.len(), "GraphQL client configured");

        Ok(GraphqlClient::new(fetcher, config.url.as_str(), hooks))
    }
}
