use bytes::Bytes;
use serde_json::{Map, Value};

use crate::Error;

/// An outgoing GraphQL request, as sent in the HTTP body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation_name: String,
}

impl Request {
    /// Builds a request from a query and anything that serializes to a JSON object.
    ///
    /// `null` and empty objects mean "no variables" and are left out of the body.
    pub fn new(query: impl Into<String>, variables: impl serde::Serialize) -> Result<Self, Error> {
        let variables = match serde_json::to_value(variables).map_err(Error::Encode)? {
            Value::Null => None,
            Value::Object(map) if map.is_empty() => None,
            Value::Object(map) => Some(map),
            other => {
                return Err(Error::Encode(serde::ser::Error::custom(format!(
                    "variables must serialize to a JSON object, got {other}"
                ))));
            }
        };

        Ok(Request {
            query: query.into(),
            variables,
            operation_name: String::new(),
        })
    }

    pub fn to_body(&self) -> Result<Bytes, Error> {
        serde_json::to_vec(self).map(Bytes::from).map_err(Error::Encode)
    }
}
