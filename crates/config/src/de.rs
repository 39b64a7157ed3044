//! Deserialization helpers shared by the configuration structs.

use serde::{Deserialize, Deserializer};

/// Decodes a JSON `null` as the type's default value.
///
/// Plain fields treat an explicit `null` the same as a missing key, so it
/// picks up the normal default during normalization.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        count: i64,
    }

    #[test]
    fn null_becomes_default() {
        let holder: Holder = serde_json::from_str(r#"{"name": null, "count": null}"#).unwrap();
        assert!(holder.name.is_empty());
        assert_eq!(holder.count, 0);
    }

    #[test]
    fn values_pass_through() {
        let holder: Holder = serde_json::from_str(r#"{"name": "x", "count": -3}"#).unwrap();
        assert_eq!(holder.name, "x");
        assert_eq!(holder.count, -3);
    }

    #[test]
    fn type_mismatch_still_fails() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"name": 1}"#);
        assert!(result.is_err());
    }
}
