//! Maps domain errors to HTTP error envelopes.
//!
//! Status codes:
//!
//! | Error               | Status | Notes                                  |
//! |---------------------|--------|----------------------------------------|
//! | `MissingInput`      | 400    | caller's fault, nothing was attempted  |
//! | `Configuration`     | 500    | deployment's fault                     |
//! | `UpstreamTransport` | 502    | names the failing step                 |
//! | `UpstreamShape`     | 500    | step labelled `validate`/`deproc_parse`|
//! | `Database`          | 500    | step labelled `persist`                |
//!
//! Upstream bodies ride along in the envelope so operators can see exactly
//! what the eGov side answered. Tokens are masked before they reach any
//! envelope or log line.

use actix_web::HttpResponse;
use serde_json::json;

use eg_core::errors::DomainError;

/// Build the error envelope for one failed request.
pub fn error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::MissingInput { .. } => HttpResponse::BadRequest().json(json!({
            "status": "error",
            "message": "appId and mToken are required",
        })),

        DomainError::Configuration { message } => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "message": message,
        })),

        DomainError::UpstreamTransport { status, body, .. } => {
            let mut envelope = json!({
                "status": "error",
                "step": error.step_label(),
                "message": "Upstream service call failed",
            });
            if let Some(status) = status {
                envelope["httpStatus"] = json!(status);
            }
            if let Some(body) = body {
                envelope["error"] = body.clone();
            }
            HttpResponse::BadGateway().json(envelope)
        }

        DomainError::UpstreamShape { raw, .. } => {
            let mut envelope = json!({
                "status": "error",
                "step": error.step_label(),
                "message": "Upstream response was not in a recognized shape",
            });
            if let Some(raw) = raw {
                envelope["raw"] = raw.clone();
            }
            HttpResponse::InternalServerError().json(envelope)
        }

        DomainError::Database { message } => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "step": "persist",
            "message": message,
        })),

        DomainError::Internal { message } => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "message": message,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eg_core::domain::value_objects::Step;

    #[test]
    fn missing_input_is_a_400() {
        let response = error_response(&DomainError::MissingInput {
            field: "appId".to_string(),
        });
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn transport_failure_is_a_502() {
        let response = error_response(&DomainError::UpstreamTransport {
            step: Step::Deproc,
            status: Some(503),
            body: None,
        });
        assert_eq!(response.status(), 502);
    }

    #[test]
    fn shape_and_database_failures_are_500s() {
        let response = error_response(&DomainError::UpstreamShape {
            step: Step::Validate,
            raw: None,
        });
        assert_eq!(response.status(), 500);

        let response = error_response(&DomainError::Database {
            message: "connection reset".to_string(),
        });
        assert_eq!(response.status(), 500);
    }
}
