//! Core types for GetAlts activations.

use crate::enums::Status;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt::{self, Display, Formatter};

// =============================================================================
// ActivationId
// =============================================================================

/// Identifier the service assigns to an activation when a number is bought.
///
/// Used to query and change the activation's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationId(u64);

impl ActivationId {
    /// Create a new ActivationId.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for ActivationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActivationId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// =============================================================================
// PhoneNumber
// =============================================================================

/// Phone number as returned by the service (e.g., "+79001234567").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Get the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits only, without a leading '+'.
    pub fn digits(&self) -> &str {
        self.0.trim().trim_start_matches('+')
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PhoneNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl From<&str> for PhoneNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

// =============================================================================
// SmsCode
// =============================================================================

/// Verification code recorded by the service for an activation.
///
/// Kept exactly as the service sent it, so codes with leading zeros survive.
/// The service reports codes as integers or strings; integers are stored in
/// their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SmsCode(String);

impl SmsCode {
    /// Create a new SmsCode.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as sent by the service.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the code, if it is all digits.
    ///
    /// Leading zeros are not represented in the result.
    pub fn to_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Display for SmsCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SmsCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SmsCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for SmsCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<u64> for SmsCode {
    fn from(code: u64) -> Self {
        Self(code.to_string())
    }
}

impl<'de> Deserialize<'de> for SmsCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(d)? {
            Raw::Number(n) => Ok(Self::from(n)),
            Raw::Text(s) if s.trim().is_empty() => Err(de::Error::custom("empty sms code")),
            Raw::Text(s) => Ok(Self(s)),
        }
    }
}

// =============================================================================
// ActivationContext
// =============================================================================

/// Status and code as reported by the service for one activation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct StatusUpdate {
    pub(crate) status: Status,
    #[serde(default)]
    pub(crate) code: Option<SmsCode>,
}

/// One purchased number and its remote lifecycle state.
///
/// The phone number and activation id never change. Status and code are only
/// ever written from a successful service response, in place, by the
/// lifecycle operations that receive the context by mutable reference.
///
/// Deserialization exists only to restore a context persisted earlier with
/// `Serialize`; do not use it to fabricate a status or code.
///
/// # Example
///
/// ```rust
/// use getalts_client::{ActivationContext, Status};
///
/// // Resume tracking an activation bought earlier.
/// let context = ActivationContext::new("+79001234567", 42);
/// assert_eq!(context.activation_id().get(), 42);
/// assert_eq!(context.status(), Status::Ready);
/// assert!(context.code().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationContext {
    phone_number: PhoneNumber,
    activation_id: ActivationId,
    status: Status,
    code: Option<SmsCode>,
}

impl ActivationContext {
    /// Create a context for a freshly bought number.
    pub fn new(phone_number: impl Into<PhoneNumber>, activation_id: impl Into<ActivationId>) -> Self {
        Self::with_status(phone_number, activation_id, Status::Ready)
    }

    pub(crate) fn with_status(
        phone_number: impl Into<PhoneNumber>,
        activation_id: impl Into<ActivationId>,
        status: Status,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            activation_id: activation_id.into(),
            status,
            code: None,
        }
    }

    /// The purchased phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// The service-assigned activation id.
    pub fn activation_id(&self) -> ActivationId {
        self.activation_id
    }

    /// Last status reported by the service.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Code reported by the service, if one has arrived.
    pub fn code(&self) -> Option<&SmsCode> {
        self.code.as_ref()
    }

    /// Overwrite status and code with a service report.
    pub(crate) fn apply(&mut self, update: StatusUpdate) {
        self.status = update.status;
        self.code = update.code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_id() {
        let id = ActivationId::from(42);
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_phone_number_digits() {
        let number = PhoneNumber::new("+79001234567");
        assert_eq!(number.as_str(), "+79001234567");
        assert_eq!(number.digits(), "79001234567");
    }

    #[test]
    fn test_sms_code_from_number_and_text() {
        let code: SmsCode = serde_json::from_str("123456").unwrap();
        assert_eq!(code.as_str(), "123456");
        assert_eq!(code.to_number(), Some(123456));

        let code: SmsCode = serde_json::from_str("\"654321\"").unwrap();
        assert_eq!(code.as_str(), "654321");

        assert!(serde_json::from_str::<SmsCode>("\"\"").is_err());
    }

    #[test]
    fn test_sms_code_keeps_leading_zeros() {
        let update: StatusUpdate =
            serde_json::from_str(r#"{"status":"STATUS_OK","code":"012345"}"#).unwrap();
        let code = update.code.unwrap();

        assert_eq!(code.to_string(), "012345");
        assert_eq!(code.as_str(), "012345");
        assert_eq!(code.to_number(), Some(12345));
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"012345\"");
    }

    #[test]
    fn test_status_update_code_optional() {
        let update: StatusUpdate = serde_json::from_str(r#"{"status":"READY"}"#).unwrap();
        assert_eq!(update.status, Status::Ready);
        assert!(update.code.is_none());

        let update: StatusUpdate =
            serde_json::from_str(r#"{"status":"STATUS_OK","code":null}"#).unwrap();
        assert!(update.code.is_none());

        assert!(serde_json::from_str::<StatusUpdate>(r#"{"status":"NOPE"}"#).is_err());
    }

    #[test]
    fn test_apply_keeps_identity_fields() {
        let mut context = ActivationContext::new("+79001234567", 7);
        context.apply(StatusUpdate {
            status: Status::WaitingForCode,
            code: Some(SmsCode::new("1111")),
        });

        assert_eq!(context.phone_number().as_str(), "+79001234567");
        assert_eq!(context.activation_id().get(), 7);
        assert_eq!(context.status(), Status::WaitingForCode);
        assert_eq!(context.code().map(SmsCode::as_str), Some("1111"));

        context.apply(StatusUpdate {
            status: Status::AccessReady,
            code: None,
        });
        assert!(context.code().is_none());
    }

    #[test]
    fn test_context_serde() {
        let context = ActivationContext::new("+380501234567", 99);
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phone_number": "+380501234567",
                "activation_id": 99,
                "status": "READY",
                "code": null
            })
        );

        let back: ActivationContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, context);
    }
}
