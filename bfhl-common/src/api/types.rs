//! Request/response types for `POST /bfhl`
//!
//! Field names are the JSON wire names; no renaming is applied.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::config::IdentityConfig;

// ========================================
// Request
// ========================================

/// Request body for `POST /bfhl`
///
/// # Examples
///
/// ```
/// use bfhl_common::DataRequest;
///
/// let request: DataRequest = serde_json::from_str(r#"{"data": ["a", "1"]}"#).unwrap();
/// assert_eq!(request.data, vec!["a", "1"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataRequest {
    /// Array of strings to classify
    pub data: Vec<String>,
}

// ========================================
// Response
// ========================================

/// Response body for `POST /bfhl`
///
/// Always sent with HTTP 200. A classification failure is reported through
/// `is_success = false` with empty categories, never through the status code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BfhlResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    /// Decimal sum of all numeric tokens
    pub sum: String,
    pub concat_string: String,
}

impl BfhlResponse {
    /// Successful response carrying `classification`
    pub fn success(identity: &IdentityConfig, classification: Classification) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: classification.odd_numbers,
            even_numbers: classification.even_numbers,
            alphabets: classification.alphabets,
            special_characters: classification.special_characters,
            sum: classification.sum.to_string(),
            concat_string: classification.concat_string,
        }
    }

    /// Unsuccessful response: identity populated, every category empty
    pub fn failure(identity: &IdentityConfig) -> Self {
        Self {
            is_success: false,
            ..Self::success(identity, Classification::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn identity() -> IdentityConfig {
        IdentityConfig::new("John_Doe", "17091999", "john@xyz.com", "ABCD123")
    }

    #[test]
    fn test_success_serializes_wire_fields() {
        let classification = classify(&["a", "1", "334", "4", "R", "$"]).unwrap();
        let response = BfhlResponse::success(&identity(), classification);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "is_success": true,
                "user_id": "john_doe_17091999",
                "email": "john@xyz.com",
                "roll_number": "ABCD123",
                "odd_numbers": ["1"],
                "even_numbers": ["334", "4"],
                "alphabets": ["A", "R"],
                "special_characters": ["$"],
                "sum": "339",
                "concat_string": "Ra",
            })
        );
    }

    #[test]
    fn test_failure_keeps_identity_and_clears_categories() {
        let response = BfhlResponse::failure(&identity());

        assert!(!response.is_success);
        assert_eq!(response.user_id, "john_doe_17091999");
        assert_eq!(response.email, "john@xyz.com");
        assert_eq!(response.roll_number, "ABCD123");
        assert!(response.odd_numbers.is_empty());
        assert!(response.even_numbers.is_empty());
        assert!(response.alphabets.is_empty());
        assert!(response.special_characters.is_empty());
        assert_eq!(response.sum, "0");
        assert_eq!(response.concat_string, "");
    }

    #[test]
    fn test_request_rejects_non_string_elements() {
        let parsed = serde_json::from_str::<DataRequest>(r#"{"data": ["a", 1]}"#);
        assert!(parsed.is_err());
    }
}
