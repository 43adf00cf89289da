//! Serialization format abstraction.
//!
//! Provides a unified interface for encoding outbound backend requests and
//! decoding inbound client bodies. Currently supports JSON via sonic-rs.

use bytes::Bytes;
use serde::Serialize;
use sonic_rs::{JsonValueTrait, LazyValue};
use std::borrow::Cow;

/// Supported serialization formats.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Format {
    #[default]
    Json,
}

impl Format {
    /// Returns the MIME content type for this format.
    pub(crate) fn content_type(self) -> &'static str {
        match self {
            Format::Json => "application/json",
        }
    }

    /// Serialize the value to bytes.
    pub(crate) fn serialize<'a, T: Serialize>(
        self,
        val: &T,
    ) -> Result<Cow<'a, [u8]>, sonic_rs::Error> {
        match self {
            Format::Json => Ok(Cow::from(sonic_rs::to_vec(val)?)),
        }
    }

    /// Decodes the top-level members of an object body, in document order.
    ///
    /// Values are returned as raw slices of `val`. A well-formed document that
    /// is not an object has no members.
    pub(crate) fn members<'a>(
        self,
        val: &'a [u8],
    ) -> Result<Vec<(String, LazyValue<'a>)>, sonic_rs::Error> {
        match self {
            Format::Json => {
                let document: sonic_rs::Value = sonic_rs::from_slice(val)?;
                if !document.is_object() {
                    return Ok(Vec::new());
                }
                sonic_rs::to_object_iter(val)
                    .map(|member| member.map(|(key, value)| (key.to_string(), value)))
                    .collect()
            }
        }
    }

    /// Prepares an upstream body for relaying to the client.
    ///
    /// Well-formed bodies are returned untouched. Anything else is wrapped as a
    /// string value so the client always receives a decodable document.
    pub(crate) fn relay(self, body: Bytes) -> Result<Bytes, sonic_rs::Error> {
        match self {
            Format::Json => {
                if sonic_rs::from_slice::<sonic_rs::Value>(&body).is_ok() {
                    return Ok(body);
                }
                let text = String::from_utf8_lossy(&body);
                Ok(Bytes::from(sonic_rs::to_vec(&text)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestStruct {
        name: String,
        value: i32,
    }

    #[test]
    fn test_format_default() {
        let format = Format::default();
        assert_eq!(format, Format::Json);
    }

    #[test]
    fn test_content_type() {
        assert_eq!(Format::Json.content_type(), "application/json");
    }

    #[test]
    fn test_serialize_struct() {
        let format = Format::Json;
        let test_data = TestStruct {
            name: "test".to_string(),
            value: 42,
        };

        let serialized = format.serialize(&test_data).unwrap();
        let expected = br#"{"name":"test","value":42}"#;
        assert_eq!(serialized.as_ref(), expected);
    }

    #[test]
    fn test_members_are_raw_slices_in_order() {
        let members = Format::Json
            .members(br#"{"a":1.50,"b":{"c": [1, 2]},"a":"x"}"#)
            .unwrap();
        let raw: Vec<(&str, &str)> = members
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_raw_str()))
            .collect();
        assert_eq!(
            raw,
            vec![("a", "1.50"), ("b", r#"{"c": [1, 2]}"#), ("a", r#""x""#)]
        );
    }

    #[test]
    fn test_members_of_non_object_is_empty() {
        assert!(Format::Json.members(b"[1,2,3]").unwrap().is_empty());
        assert!(Format::Json.members(b"\"text\"").unwrap().is_empty());
    }

    #[test]
    fn test_members_of_invalid_json_is_error() {
        assert!(Format::Json.members(b"not json at all").is_err());
        assert!(Format::Json.members(br#"{"a": invalid}"#).is_err());
        assert!(Format::Json.members(b"").is_err());
    }

    #[test]
    fn test_relay_keeps_json_bytes_untouched() {
        let body = Bytes::from_static(b"{\"yes\": 10, \"no\":3}\n");
        let relayed = Format::Json.relay(body.clone()).unwrap();
        assert_eq!(relayed, body);
    }

    #[test]
    fn test_relay_wraps_plain_text() {
        let body = Bytes::from_static(b"Session not found\n");
        let relayed = Format::Json.relay(body).unwrap();
        assert_eq!(relayed.as_ref(), br#""Session not found\n""#);
    }

    #[test]
    fn test_relay_wraps_empty_body() {
        let relayed = Format::Json.relay(Bytes::new()).unwrap();
        assert_eq!(relayed.as_ref(), br#""""#);
    }

    #[test]
    fn test_relay_keeps_scalar_json() {
        let relayed = Format::Json.relay(Bytes::from_static(b"42")).unwrap();
        assert_eq!(relayed.as_ref(), b"42");
    }
}
