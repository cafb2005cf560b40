use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::store::Item;

/// An item as it appears in API responses
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub id: String,
    pub name: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
        }
    }
}

/// Response type for successful create operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateResponse {
    pub ok: bool,
    pub item: ItemResponse,
}

/// Response type for delete-by-name
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteByNameResponse {
    pub ok: bool,
    pub deleted: u64,
    pub name: String,
}

/// Response type for delete-by-id
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteByIdResponse {
    pub ok: bool,
    pub deleted: u64,
    pub id: String,
}

/// Response type for delete-all
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteAllResponse {
    pub ok: bool,
    pub deleted: u64,
}

/// Validated create-item input.
///
/// The create payload arrives as loose JSON; `parse` checks that it is an
/// object whose `name` field is a string that is non-empty after trimming.
/// The name is stored exactly as submitted, untrimmed.
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    pub fn parse(payload: &JsonValue) -> Result<Self, ApiError> {
        let object = payload
            .as_object()
            .ok_or(ApiError::InvalidName("request body must be a JSON object"))?;

        let name = object
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or(ApiError::InvalidName("name is required"))?;

        if name.trim().is_empty() {
            return Err(ApiError::InvalidName("name is required"));
        }

        Ok(Self {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_name() {
        let item = NewItem::parse(&json!({"name": "hello"})).unwrap();
        assert_eq!(item.name, "hello");
    }

    #[test]
    fn test_parse_keeps_surrounding_whitespace() {
        let item = NewItem::parse(&json!({"name": "  hello  "})).unwrap();
        assert_eq!(item.name, "  hello  ");
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        assert!(NewItem::parse(&json!({})).is_err());
        assert!(NewItem::parse(&json!({"title": "hello"})).is_err());
    }

    #[test]
    fn test_parse_rejects_blank_name() {
        assert!(NewItem::parse(&json!({"name": ""})).is_err());
        assert!(NewItem::parse(&json!({"name": "   "})).is_err());
        assert!(NewItem::parse(&json!({"name": "\t\n"})).is_err());
    }

    #[test]
    fn test_parse_rejects_non_text_name() {
        assert!(NewItem::parse(&json!({"name": 42})).is_err());
        assert!(NewItem::parse(&json!({"name": null})).is_err());
        assert!(NewItem::parse(&json!({"name": ["a"]})).is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_body() {
        assert!(NewItem::parse(&json!("just a string")).is_err());
        assert!(NewItem::parse(&json!([1, 2, 3])).is_err());
        assert!(NewItem::parse(&json!(null)).is_err());
    }
}
