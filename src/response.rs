//! Response envelope and payload types for the GetAlts API.

use crate::enums::Status;
use crate::errors::{ApiError, GetAltsError, Result};
use crate::types::{ActivationId, PhoneNumber};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decoded top-level JSON object of a successful response.
pub type Payload = Map<String, Value>;

/// Unified response type for GetAlts API calls.
///
/// Every response is a JSON object. A top-level `error` key marks a
/// rejection; anything else is the operation's payload.
#[derive(Debug)]
pub enum ApiResponse {
    Success(Payload),
    Error(ApiError),
}

impl ApiResponse {
    /// Parse a GetAlts response from raw text.
    pub fn from_text(text: &str) -> std::result::Result<Self, serde_json::Error> {
        let mut payload: Payload = serde_json::from_str(text)?;

        if let Some(error) = payload.remove("error") {
            let message = match error {
                Value::String(s) => s,
                other => other.to_string(),
            };
            return Ok(Self::Error(ApiError::new(message)));
        }

        Ok(Self::Success(payload))
    }

    /// Convert response into a Result for ergonomic error handling.
    pub fn into_result(self) -> std::result::Result<Payload, ApiError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error(e) => Err(e),
        }
    }
}

/// Decode a payload into an operation-specific type.
///
/// Missing fields and unknown wire codes both surface as
/// [`GetAltsError::MalformedResponse`].
pub(crate) fn decode<T: DeserializeOwned>(payload: Payload) -> Result<T> {
    serde_json::from_value(Value::Object(payload)).map_err(GetAltsError::MalformedResponse)
}

/// Payload of `get_balance`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct BalanceResponse {
    pub(crate) balance: f64,
}

/// Payload of `buy_number`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PurchaseResponse {
    pub(crate) phone_number: PhoneNumber,
    pub(crate) activation_id: ActivationId,
    pub(crate) status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatusUpdate;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::from_text(r#"{"balance": 12.5}"#).unwrap();
        let payload = response.into_result().unwrap();
        let balance: BalanceResponse = decode(payload).unwrap();
        assert_eq!(balance.balance, 12.5);
    }

    #[test]
    fn test_error_response() {
        let response = ApiResponse::from_text(r#"{"error": "NO_BALANCE"}"#).unwrap();
        match response.into_result() {
            Err(error) => assert_eq!(error.message, "NO_BALANCE"),
            Ok(_) => panic!("Expected error"),
        }
    }

    #[test]
    fn test_non_string_error_kept_verbatim() {
        let response = ApiResponse::from_text(r#"{"error": 403}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err().message, "403");
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(ApiResponse::from_text("NO_NUMBERS").is_err());
        assert!(ApiResponse::from_text("[1, 2]").is_err());
    }

    #[test]
    fn test_purchase_response() {
        let payload = ApiResponse::from_text(
            r#"{"phone_number": "+79001234567", "activation_id": 42, "status": "READY"}"#,
        )
        .unwrap()
        .into_result()
        .unwrap();

        let purchase: PurchaseResponse = decode(payload).unwrap();
        assert_eq!(purchase.activation_id.get(), 42);
        assert_eq!(purchase.status, Status::Ready);
    }

    #[test]
    fn test_unknown_status_is_malformed() {
        let payload = ApiResponse::from_text(r#"{"status": "STATUS_SOMETHING_NEW"}"#)
            .unwrap()
            .into_result()
            .unwrap();

        let result = decode::<StatusUpdate>(payload);
        assert!(matches!(result, Err(GetAltsError::MalformedResponse(_))));
    }
}
