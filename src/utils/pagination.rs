use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let limit = params.limit();
        Self {
            page: params.page(),
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

/// Query-string pagination. Both fields arrive as strings from the query
/// layer, so empty values (`?page=&limit=`) are treated as absent rather
/// than as parse failures.
#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).max(1).min(100)
    }

    pub fn offset(&self) -> i64 {
        // page is unbounded client input; saturate instead of overflowing
        self.page().saturating_sub(1).saturating_mul(self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_pagination_params_custom_values() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(20),
        };
        assert_eq!(params.page(), 3);
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn test_pagination_params_limit_boundary_cases() {
        let test_cases = vec![
            (Some(1), 1),
            (Some(50), 50),
            (Some(100), 100),
            (Some(101), 100),
            (Some(0), 1),
            (Some(-1), 1),
        ];

        for (input, expected) in test_cases {
            let params = PaginationParams {
                page: Some(1),
                limit: input,
            };
            assert_eq!(params.limit(), expected);
        }
    }

    #[test]
    fn test_pagination_params_page_boundary_cases() {
        let test_cases = vec![
            (Some(1), 1),
            (Some(7), 7),
            (Some(0), 1),
            (Some(-5), 1),
            (None, 1),
        ];

        for (input, expected) in test_cases {
            let params = PaginationParams {
                page: input,
                limit: Some(10),
            };
            assert_eq!(params.page(), expected);
        }
    }

    #[test]
    fn test_pagination_params_offset_from_page() {
        let params = PaginationParams {
            page: Some(5),
            limit: Some(25),
        };
        assert_eq!(params.offset(), 100);
    }

    #[test]
    fn test_pagination_params_offset_saturates_on_huge_page() {
        let params = PaginationParams {
            page: Some(i64::MAX),
            limit: Some(100),
        };
        assert_eq!(params.offset(), i64::MAX);

        let params = PaginationParams {
            page: Some(i64::MAX),
            limit: Some(1),
        };
        assert_eq!(params.offset(), i64::MAX - 1);
    }

    #[test]
    fn test_pagination_params_deserialize_with_values() {
        let json = r#"{"page":"2","limit":"25"}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 25);
    }

    #[test]
    fn test_pagination_params_deserialize_empty_strings() {
        let json = r#"{"page":"","limit":""}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_pagination_params_deserialize_missing_fields() {
        let json = r#"{}"#;
        let params: PaginationParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_pagination_params_deserialize_rejects_garbage() {
        let json = r#"{"page":"abc"}"#;
        assert!(serde_json::from_str::<PaginationParams>(json).is_err());
    }

    #[test]
    fn test_pagination_meta_rounds_pages_up() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(&params, 25);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.total, 25);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_pagination_meta_exact_division() {
        let params = PaginationParams {
            page: Some(2),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(&params, 30);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn test_pagination_meta_zero_total() {
        let params = PaginationParams::default();
        let meta = PaginationMeta::new(&params, 0);
        assert_eq!(meta.total, 0);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_pagination_meta_serialize() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(20),
        };
        let meta = PaginationMeta::new(&params, 100);
        let serialized = serde_json::to_string(&meta).unwrap();
        assert!(serialized.contains(r#""page":3"#));
        assert!(serialized.contains(r#""limit":20"#));
        assert!(serialized.contains(r#""total":100"#));
        assert!(serialized.contains(r#""total_pages":5"#));
    }
}
