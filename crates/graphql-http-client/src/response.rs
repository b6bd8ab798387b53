use serde::de::DeserializeOwned;

#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<serde_json::Value>,
}

/// Decodes a GraphQL response body, writing its `data` into `target`.
///
/// A missing or `null` `data` leaves `target` as it was. The `errors` array is not interpreted.
pub fn decode_into<T>(body: &[u8], target: &mut T) -> Result<(), serde_json::Error>
where
    T: DeserializeOwned,
{
    let envelope: Envelope<T> = serde_json::from_slice(body)?;

    if let Some(errors) = envelope.errors.as_ref().and_then(|errors| errors.as_array()) {
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "GraphQL response contains errors");
        }
    }

    if let Some(data) = envelope.data {
        *target = data;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::{json, Value};

    use super::*;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct Ping {
        ping: String,
    }

    #[test]
    fn writes_data_into_the_target() {
        let mut out = Ping::default();
        decode_into(br#"{"data":{"ping":"pong"}}"#, &mut out).unwrap();

        assert_eq!(out.ping, "pong");
    }

    #[test]
    fn null_or_missing_data_leaves_the_target_alone() {
        let mut out = json!({"kept": true});

        decode_into(br#"{"data":null,"errors":[{"message":"boom"}]}"#, &mut out).unwrap();
        assert_eq!(out, json!({"kept": true}));

        decode_into(br#"{"errors":[{"message":"boom"}]}"#, &mut out).unwrap();
        assert_eq!(out, json!({"kept": true}));
    }

    #[test]
    fn errors_next_to_data_are_not_a_failure() {
        let mut out = BTreeMap::<String, Value>::new();
        decode_into(
            br#"{"data":{"user":null},"errors":[{"message":"not found","path":["user"]}]}"#,
            &mut out,
        )
        .unwrap();

        assert_eq!(out, BTreeMap::from([("user".to_owned(), Value::Null)]));
    }

    #[test]
    fn errors_of_any_shape_are_ignored() {
        let mut out = Ping::default();
        decode_into(br#"{"data":{"ping":"pong"},"errors":{"message":"x"}}"#, &mut out).unwrap();
        assert_eq!(out.ping, "pong");

        let mut out = Ping::default();
        decode_into(br#"{"data":{"ping":"pong"},"errors":"upstream timed out"}"#, &mut out).unwrap();
        assert_eq!(out.ping, "pong");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut out = Ping::default();
        assert!(decode_into(b"<html>bad gateway</html>", &mut out).is_err());
        assert!(decode_into(br#"{"data":{"ping":"po"#, &mut out).is_err());
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let mut out = Ping::default();
        let error = decode_into(br#"{"data":{"ping":42}}"#, &mut out).unwrap_err();

        assert!(error.is_data());
        assert_eq!(out, Ping::default());
    }
}
