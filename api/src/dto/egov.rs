//! DTOs for the eGov login endpoint.

use serde::Deserialize;
use validator::Validate;

use eg_core::domain::value_objects::{LoginRequest, Mode};

/// Body of `POST /api/egov`.
///
/// Absent fields deserialize as empty strings so the handler can answer
/// with the service's own envelope instead of a framework deserialization
/// error.
#[derive(Debug, Deserialize, Validate)]
pub struct EgovLoginRequest {
    /// Application identifier issued to the caller
    #[serde(rename = "appId", default)]
    #[validate(length(min = 1, message = "appId is required"))]
    pub app_id: String,

    /// Session token from the citizen's device
    #[serde(rename = "mToken", default)]
    #[validate(length(min = 1, message = "mToken is required"))]
    pub m_token: String,

    /// `login` (default) or `check`
    #[serde(default)]
    pub mode: Mode,
}

impl From<EgovLoginRequest> for LoginRequest {
    fn from(dto: EgovLoginRequest) -> Self {
        LoginRequest::new(dto.app_id, dto.m_token).with_mode(dto.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let dto: EgovLoginRequest =
            serde_json::from_str(r#"{"appId": "A1", "mToken": "M1", "mode": "check"}"#).unwrap();
        assert_eq!(dto.app_id, "A1");
        assert_eq!(dto.m_token, "M1");
        assert_eq!(dto.mode, Mode::Check);
    }

    #[test]
    fn mode_defaults_to_login() {
        let dto: EgovLoginRequest =
            serde_json::from_str(r#"{"appId": "A1", "mToken": "M1"}"#).unwrap();
        assert_eq!(dto.mode, Mode::Login);
    }

    #[test]
    fn absent_fields_become_empty_and_fail_validation() {
        let dto: EgovLoginRequest = serde_json::from_str(r#"{"appId": "A1"}"#).unwrap();
        assert!(dto.m_token.is_empty());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn converts_into_a_domain_request() {
        let dto: EgovLoginRequest =
            serde_json::from_str(r#"{"appId": "A1", "mToken": "M1"}"#).unwrap();
        let request: LoginRequest = dto.into();
        assert_eq!(request.app_id, "A1");
        assert_eq!(request.mode, Mode::Login);
    }
}
