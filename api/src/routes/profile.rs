//! Handler for `GET /api/profile`.

use actix_web::{web, HttpResponse};

use crate::handlers::error::error_response;
use crate::routes::egov::AppState;

use eg_core::clients::EgovClient;
use eg_core::repositories::ProfileRepository;

/// Handler for GET /api/profile
///
/// Returns the most recently updated profile as a summary, or `null` when
/// nothing has been stored yet.
pub async fn latest_profile<C, P>(state: web::Data<AppState<C, P>>) -> HttpResponse
where
    C: EgovClient + 'static,
    P: ProfileRepository + 'static,
{
    match state.profiles.find_latest().await {
        Ok(profile) => HttpResponse::Ok().json(serde_json::json!({
            "status": "success",
            "data": profile.map(|p| p.summary()),
        })),
        Err(error) => {
            log::warn!("profile lookup failed: {}", error);
            error_response(&error)
        }
    }
}
