use std::{fmt, sync::Arc};

use bytes::Bytes;
use http::{
    header::{self, InvalidHeaderValue},
    HeaderName, HeaderValue,
};

/// The outgoing request as seen by hooks.
pub type HttpRequest = http::Request<Bytes>;

/// Mutates an outgoing request before it is sent, typically to add headers.
///
/// Hooks registered on the client run first, in order, followed by the hooks passed to a single
/// [`execute`](crate::GraphqlClient::execute) call.
#[derive(Clone)]
pub struct RequestHook(Arc<dyn Fn(&mut HttpRequest) + Send + Sync>);

impl RequestHook {
    pub fn new(hook: impl Fn(&mut HttpRequest) + Send + Sync + 'static) -> Self {
        RequestHook(Arc::new(hook))
    }

    /// Sets `name` to `value`, replacing earlier values.
    pub fn header(name: HeaderName, value: HeaderValue) -> Self {
        RequestHook::new(move |request| {
            request.headers_mut().insert(name.clone(), value.clone());
        })
    }

    pub fn bearer_auth(token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::try_from(format!("Bearer {token}"))?;
        value.set_sensitive(true);

        Ok(RequestHook::header(header::AUTHORIZATION, value))
    }

    pub fn user_agent(value: HeaderValue) -> Self {
        RequestHook::header(header::USER_AGENT, value)
    }

    pub(crate) fn apply(&self, request: &mut HttpRequest) {
        (self.0)(request)
    }
}

impl fmt::Debug for RequestHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RequestHook").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        http::Request::new(Bytes::new())
    }

    #[test]
    fn header_replaces_existing_value() {
        let mut request = request();
        request
            .headers_mut()
            .insert("x-api-key", HeaderValue::from_static("old"));

        RequestHook::header(HeaderName::from_static("x-api-key"), HeaderValue::from_static("new")).apply(&mut request);

        let values: Vec<_> = request.headers().get_all("x-api-key").iter().collect();
        assert_eq!(values, ["new"]);
    }

    #[test]
    fn bearer_auth_is_sensitive() {
        let mut request = request();
        RequestHook::bearer_auth("t0ken").unwrap().apply(&mut request);

        let value = &request.headers()[header::AUTHORIZATION];
        assert_eq!(value, "Bearer t0ken");
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_auth_rejects_control_characters() {
        assert!(RequestHook::bearer_auth("line\nbreak").is_err());
    }

    #[test]
    fn closures_see_the_whole_request() {
        let mut request = request();
        *request.body_mut() = Bytes::from_static(b"{}");

        RequestHook::new(|request| {
            let len = request.body().len().to_string();
            request.headers_mut().insert("x-body-len", len.parse().unwrap());
        })
        .apply(&mut request);

        assert_eq!(request.headers()["x-body-len"], "2");
    }
}
