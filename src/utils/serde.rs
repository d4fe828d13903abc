use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Deserializes an optional UUID from a query-string value, treating an
/// empty string the same as an absent parameter.
pub fn deserialize_optional_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Uuid::parse_str(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_uuid")]
        seller_id: Option<Uuid>,
    }

    #[test]
    fn test_deserialize_valid_uuid() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{"seller_id":"{}"}}"#, id);
        let params: Params = serde_json::from_str(&json).unwrap();
        assert_eq!(params.seller_id, Some(id));
    }

    #[test]
    fn test_deserialize_empty_string_as_none() {
        let params: Params = serde_json::from_str(r#"{"seller_id":""}"#).unwrap();
        assert_eq!(params.seller_id, None);
    }

    #[test]
    fn test_deserialize_missing_as_none() {
        let params: Params = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(params.seller_id, None);
    }

    #[test]
    fn test_deserialize_garbage_fails() {
        assert!(serde_json::from_str::<Params>(r#"{"seller_id":"not-a-uuid"}"#).is_err());
    }
}
