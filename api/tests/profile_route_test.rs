//! Integration tests for the latest-profile endpoint.

use actix_web::{test, web, App};
use serde_json::Value;
use std::sync::Arc;

use eg_api::routes;
use eg_api::routes::egov::AppState;
use eg_core::clients::MockEgovClient;
use eg_core::domain::entities::CitizenRecord;
use eg_core::repositories::{MockProfileRepository, ProfileRepository};
use eg_core::services::{LoginService, LoginServiceConfig};

fn build_state() -> web::Data<AppState<MockEgovClient, MockProfileRepository>> {
    let client = Arc::new(MockEgovClient::new());
    let profiles = Arc::new(MockProfileRepository::new());
    web::Data::new(AppState {
        login_service: Arc::new(LoginService::new(
            Arc::clone(&client),
            Arc::clone(&profiles),
            LoginServiceConfig::default(),
        )),
        profiles,
    })
}

#[actix_web::test]
async fn empty_store_answers_with_null_data() {
    let state = build_state();
    let app = test::init_service(App::new().app_data(state.clone()).service(
        web::scope("/api").route(
            "/profile",
            web::get().to(routes::profile::latest_profile::<MockEgovClient, MockProfileRepository>),
        ),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"], Value::Null);
}

#[actix_web::test]
async fn most_recently_updated_profile_is_returned_as_a_summary() {
    let state = build_state();

    let mut record = CitizenRecord::new("C1");
    record.first_name = Some("Somchai".to_string());
    record.mobile = Some("0812345678".to_string());
    state.profiles.upsert(&record, "A1").await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let record = CitizenRecord::new("C2");
    state.profiles.upsert(&record, "A1").await.unwrap();

    let app = test::init_service(App::new().app_data(state.clone()).service(
        web::scope("/api").route(
            "/profile",
            web::get().to(routes::profile::latest_profile::<MockEgovClient, MockProfileRepository>),
        ),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["citizenId"], "C2");
    // summaries never carry contact details
    assert!(body["data"].get("mobile").is_none());
}
