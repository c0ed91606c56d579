//! Handler for `POST /api/egov`.

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::egov::EgovLoginRequest;
use crate::handlers::error::error_response;

use eg_core::clients::EgovClient;
use eg_core::domain::value_objects::LoginOutcome;
use eg_core::repositories::ProfileRepository;
use eg_core::services::LoginService;

/// Application state that holds shared services
pub struct AppState<C, P>
where
    C: EgovClient,
    P: ProfileRepository,
{
    pub login_service: Arc<LoginService<C, P>>,
    pub profiles: Arc<P>,
}

/// Handler for POST /api/egov
///
/// Runs one login (or check) orchestration against the upstream eGov
/// service.
///
/// # Request Body
///
/// ```json
/// {
///     "appId": "app-123",
///     "mToken": "session-token",
///     "mode": "login"
/// }
/// ```
///
/// # Response
///
/// ## Login mode (200 OK)
/// ```json
/// {
///     "status": "success",
///     "data": { "citizenId": "...", "firstName": "...", "appId": "..." },
///     "notification": { "state": "sent" }
/// }
/// ```
///
/// ## Check mode (200 OK)
/// ```json
/// {
///     "status": "success",
///     "found": true,
///     "data": { "citizenId": "..." }
/// }
/// ```
///
/// ## Errors
/// 400 for missing input, 502 for upstream transport failures, 500 for
/// shape, configuration, and persistence failures; all carry a `step`
/// label where one applies.
pub async fn login<C, P>(
    state: web::Data<AppState<C, P>>,
    request: web::Json<EgovLoginRequest>,
) -> HttpResponse
where
    C: EgovClient + 'static,
    P: ProfileRepository + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    // mToken never appears in logs
    log::info!(
        "[{}] egov login request: appId={}, mode={:?}",
        request_id,
        request.app_id,
        request.mode
    );

    if request.0.validate().is_err() {
        log::warn!("[{}] rejected: missing appId or mToken", request_id);
        return HttpResponse::BadRequest().json(serde_json::json!({
            "status": "error",
            "message": "appId and mToken are required",
        }));
    }

    match state.login_service.login(request.into_inner().into()).await {
        Ok(LoginOutcome::LoggedIn { data, notification }) => {
            log::info!("[{}] login complete: citizenId={}", request_id, data.citizen_id);
            HttpResponse::Ok().json(serde_json::json!({
                "status": "success",
                "data": data,
                "notification": notification,
            }))
        }
        Ok(LoginOutcome::Checked { found, data }) => {
            log::info!("[{}] check complete: found={}", request_id, found);
            HttpResponse::Ok().json(serde_json::json!({
                "status": "success",
                "found": found,
                "data": data,
            }))
        }
        Err(error) => {
            log::warn!("[{}] login failed: {}", request_id, error);
            error_response(&error)
        }
    }
}
