//! Write-masked carrier for version-control configuration.
//!
//! A repository's `vcs-config` is handed verbatim to the version-control
//! backend and may hold credentials. [`SecretMessage`] keeps it out of every
//! JSON document produced by generic serialization: decoding captures the raw
//! JSON text, encoding always yields `{}`.
//!
//! # Examples
//!
//! ```
//! use trawl_config::SecretMessage;
//!
//! let secret: SecretMessage = serde_json::from_str(r#"{"token": "ghp_xxx"}"#).unwrap();
//! assert_eq!(secret.expose_str(), r#"{"token": "ghp_xxx"}"#);
//! assert_eq!(serde_json::to_string(&secret).unwrap(), "{}");
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// An opaque JSON payload that never serializes its contents.
///
/// The payload is stored in a [`SecretString`], so it is also redacted from
/// `Debug` output. The only way to read it back is through
/// [`expose_bytes`](Self::expose_bytes) or [`expose_str`](Self::expose_str).
#[derive(Debug)]
pub struct SecretMessage(SecretString);

impl SecretMessage {
    /// Wraps raw JSON text.
    ///
    /// The text is stored as given; it is not validated or re-encoded.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Returns the raw JSON bytes exactly as they appeared in the input.
    #[must_use]
    pub fn expose_bytes(&self) -> &[u8] {
        self.expose_str().as_bytes()
    }

    /// Returns the raw JSON text exactly as it appeared in the input.
    #[must_use]
    pub fn expose_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretMessage {
    fn clone(&self) -> Self {
        Self::new(self.expose_str())
    }
}

impl Serialize for SecretMessage {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_map(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for SecretMessage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Self::new(raw.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_captures_raw_text() {
        let secret: SecretMessage = serde_json::from_str(r#"{"x":1}"#).unwrap();
        assert_eq!(secret.expose_bytes(), br#"{"x":1}"#);
    }

    #[test]
    fn deserialize_keeps_whitespace_and_key_order() {
        let input = r#"{ "z": [1, 2],   "a": {"b": null} }"#;
        let secret: SecretMessage = serde_json::from_str(input).unwrap();
        assert_eq!(secret.expose_str(), input);
    }

    #[test]
    fn deserialize_accepts_any_shape() {
        for input in [r#""a string""#, "42", "[1,2,3]", "true"] {
            let secret: SecretMessage = serde_json::from_str(input).unwrap();
            assert_eq!(secret.expose_str(), input);
        }
    }

    #[test]
    fn serialize_is_always_empty_object() {
        let secret: SecretMessage = serde_json::from_str(r#"{"x":1}"#).unwrap();
        assert_eq!(serde_json::to_string(&secret).unwrap(), "{}");
        assert_eq!(serde_json::to_string_pretty(&secret).unwrap(), "{}");
    }

    #[test]
    fn serialize_ignores_non_object_payloads() {
        let secret = SecretMessage::new("[\"password\"]");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "{}");
    }

    #[test]
    fn debug_is_redacted() {
        let secret = SecretMessage::new(r#"{"token":"hunter2"}"#);
        let debug = format!("{secret:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn clone_keeps_payload() {
        let secret = SecretMessage::new(r#"{"x":1}"#);
        assert_eq!(secret.clone().expose_str(), r#"{"x":1}"#);
    }

    #[test]
    fn missing_option_is_none_and_null_is_none() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            secret: Option<SecretMessage>,
        }

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.secret.is_none());

        let holder: Holder = serde_json::from_str(r#"{"secret": null}"#).unwrap();
        assert!(holder.secret.is_none());

        let holder: Holder = serde_json::from_str(r#"{"secret": {"k": "v"}}"#).unwrap();
        assert_eq!(holder.secret.unwrap().expose_str(), r#"{"k": "v"}"#);
    }
}
