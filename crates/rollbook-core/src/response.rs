//! Success envelopes.
//!
//! Clients branch on the `success` flag, so every success body carries it
//! alongside the payload. Failures use [`crate::errors::ErrorResponse`].

use serde::Serialize;
use utoipa::ToSchema;

/// A bare confirmation, e.g. the health check.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A single record, optionally with a confirmation message.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// A full listing of one collection.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_response_omits_missing_message() {
        let value = serde_json::to_value(DataResponse::new(json!({"name": "A"}))).unwrap();
        assert_eq!(value, json!({"success": true, "data": {"name": "A"}}));
    }

    #[test]
    fn test_list_response_counts_items() {
        let value = serde_json::to_value(ListResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["success"], true);
    }
}
