//! Version-specific Compute Engine wire types
//!
//! One module per API version, mirroring the JSON the REST surface speaks.
//! Field sets differ between versions; `beta` is a superset of `v1`.

pub mod beta;
pub mod v1;

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// 64-bit ids come back from the API as decimal strings.
pub(crate) mod u64_string {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        struct U64Visitor;

        impl Visitor<'_> for U64Visitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an unsigned integer or a decimal string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
                u64::try_from(v).map_err(|_| E::custom(format!("negative id {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
                v.parse().map_err(|_| E::custom(format!("invalid id {v:?}")))
            }
        }

        deserializer.deserialize_any(U64Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_accept_strings_and_numbers() {
        let from_str: v1::Address = serde_json::from_str(r#"{"id": "4113456789012345678"}"#).unwrap();
        assert_eq!(from_str.id, 4113456789012345678);

        let from_num: v1::Address = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(from_num.id, 42);

        assert!(serde_json::from_str::<v1::Address>(r#"{"id": "abc"}"#).is_err());
    }

    #[test]
    fn test_defaults_are_not_serialized() {
        let addr = v1::Address {
            name: "web".to_string(),
            id: 7,
            ..Default::default()
        };
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(json, serde_json::json!({"id": "7", "name": "web"}));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let op: beta::Operation = serde_json::from_str(
            r#"{"name": "op-1", "status": "DONE", "somethingNew": {"x": 1}}"#,
        )
        .unwrap();
        assert_eq!(op.name, "op-1");
        assert_eq!(op.status, "DONE");
    }

    #[test]
    fn test_beta_only_fields_round_trip_on_the_wire() {
        let addr: beta::Address =
            serde_json::from_str(r#"{"name": "a", "ipVersion": "IPV6", "addressType": "EXTERNAL"}"#)
                .unwrap();
        assert_eq!(addr.ip_version, "IPV6");
        let json = serde_json::to_value(&addr).unwrap();
        assert_eq!(json["ipVersion"], "IPV6");
    }
}
