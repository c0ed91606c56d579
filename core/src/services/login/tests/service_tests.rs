//! Unit tests for the login orchestration service.

use std::sync::Arc;

use serde_json::json;

use crate::clients::mock::MockEgovClient;
use crate::clients::StepResult;
use crate::domain::value_objects::{LoginOutcome, LoginRequest, Mode, NotificationStatus, Step};
use crate::errors::DomainError;
use crate::repositories::profile::mock::MockProfileRepository;
use crate::repositories::ProfileRepository;
use crate::services::login::{LoginService, LoginServiceConfig};

fn service(
    client: MockEgovClient,
    repo: MockProfileRepository,
) -> (
    LoginService<MockEgovClient, MockProfileRepository>,
    Arc<MockEgovClient>,
    Arc<MockProfileRepository>,
) {
    let client = Arc::new(client);
    let repo = Arc::new(repo);
    let service = LoginService::new(
        Arc::clone(&client),
        Arc::clone(&repo),
        LoginServiceConfig::default(),
    );
    (service, client, repo)
}

#[tokio::test]
async fn happy_path_persists_profile_and_sends_notification() {
    let (service, client, repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    let outcome = service.login(LoginRequest::new("A1", "M1")).await.unwrap();

    match outcome {
        LoginOutcome::LoggedIn { data, notification } => {
            assert_eq!(data.citizen_id, "C9");
            assert_eq!(data.first_name.as_deref(), Some("Somchai"));
            assert_eq!(data.app_id, "A1");
            assert_eq!(notification, NotificationStatus::Sent);
        }
        other => panic!("expected LoggedIn, got {:?}", other),
    }

    assert_eq!(
        client.calls(),
        vec![Step::Validate, Step::Deproc, Step::Notify]
    );
    let stored = repo.find_by_citizen_id("C9").await.unwrap().unwrap();
    assert_eq!(stored.user_id.as_deref(), Some("U1"));
}

#[tokio::test]
async fn repeated_logins_keep_one_record_and_created_at() {
    let (service, _client, repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    service.login(LoginRequest::new("A1", "M1")).await.unwrap();
    let first = repo.find_by_citizen_id("C9").await.unwrap().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service.login(LoginRequest::new("A1", "M1")).await.unwrap();
    let second = repo.find_by_citizen_id("C9").await.unwrap().unwrap();

    assert_eq!(repo.count().await, 1);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn check_mode_never_writes_or_notifies() {
    let (service, client, repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    let outcome = service
        .login(LoginRequest::new("A1", "M1").with_mode(Mode::Check))
        .await
        .unwrap();

    match outcome {
        LoginOutcome::Checked { found, data } => {
            assert!(!found);
            assert!(data.is_none());
        }
        other => panic!("expected Checked, got {:?}", other),
    }
    assert_eq!(repo.count().await, 0);
    assert_eq!(client.call_count(Step::Notify), 0);
}

#[tokio::test]
async fn check_mode_reports_an_existing_profile() {
    let (service, _client, _repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    service.login(LoginRequest::new("A1", "M1")).await.unwrap();
    let outcome = service
        .login(LoginRequest::new("A1", "M1").with_mode(Mode::Check))
        .await
        .unwrap();

    match outcome {
        LoginOutcome::Checked { found, data } => {
            assert!(found);
            assert_eq!(data.unwrap().citizen_id, "C9");
        }
        other => panic!("expected Checked, got {:?}", other),
    }
}

#[tokio::test]
async fn notify_failure_does_not_demote_the_login() {
    let client = MockEgovClient::new()
        .with_notify(StepResult::transport_failure(Step::Notify, "timed out"));
    let (service, _client, repo) = service(client, MockProfileRepository::new());

    let outcome = service.login(LoginRequest::new("A1", "M1")).await.unwrap();

    match outcome {
        LoginOutcome::LoggedIn { notification, .. } => {
            assert!(matches!(notification, NotificationStatus::Failed { .. }));
        }
        other => panic!("expected LoggedIn, got {:?}", other),
    }
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn missing_user_id_skips_notification() {
    let client = MockEgovClient::new().with_deproc(StepResult::from_http(
        Step::Deproc,
        200,
        Some(json!({"citizenId": "C7", "firstName": "Malee"})),
        String::new(),
    ));
    let (service, client, _repo) = service(client, MockProfileRepository::new());

    let outcome = service.login(LoginRequest::new("A1", "M1")).await.unwrap();

    match outcome {
        LoginOutcome::LoggedIn { notification, .. } => {
            assert!(matches!(notification, NotificationStatus::Skipped { .. }));
        }
        other => panic!("expected LoggedIn, got {:?}", other),
    }
    assert_eq!(client.call_count(Step::Notify), 0);
}

#[tokio::test]
async fn blank_inputs_fail_before_any_outbound_call() {
    let (service, client, _repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    let err = service.login(LoginRequest::new("", "M1")).await.unwrap_err();
    assert!(matches!(err, DomainError::MissingInput { ref field } if field == "appId"));

    let err = service
        .login(LoginRequest::new("A1", "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MissingInput { ref field } if field == "mToken"));

    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn missing_credentials_fail_before_any_outbound_call() {
    let client = MockEgovClient::new().without_credentials();
    let (service, client, _repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Configuration { .. }));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn validate_transport_failure_names_the_step() {
    let client = MockEgovClient::new().with_validate(StepResult::from_http(
        Step::Validate,
        503,
        Some(json!({"error": "maintenance"})),
        String::new(),
    ));
    let (service, client, _repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    match err {
        DomainError::UpstreamTransport { step, status, body } => {
            assert_eq!(step, Step::Validate);
            assert_eq!(status, Some(503));
            assert_eq!(body.unwrap()["error"], "maintenance");
        }
        other => panic!("expected UpstreamTransport, got {:?}", other),
    }
    assert_eq!(client.call_count(Step::Deproc), 0);
}

#[tokio::test]
async fn tokenless_validate_body_is_a_shape_error() {
    let client = MockEgovClient::new().with_validate(StepResult::from_http(
        Step::Validate,
        200,
        Some(json!({"status": "ok"})),
        String::new(),
    ));
    let (service, _client, _repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::UpstreamShape {
            step: Step::Validate,
            ..
        }
    ));
    assert_eq!(err.step_label(), Some("validate"));
}

#[tokio::test]
async fn deproc_transport_failure_names_the_step() {
    let client = MockEgovClient::new()
        .with_deproc(StepResult::transport_failure(Step::Deproc, "connection reset"));
    let (service, _client, repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::UpstreamTransport {
            step: Step::Deproc,
            status: None,
            ..
        }
    ));
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn citizenless_deproc_body_is_a_parse_error() {
    let client = MockEgovClient::new().with_deproc(StepResult::from_http(
        Step::Deproc,
        200,
        Some(json!({"data": {"status": "ok"}})),
        String::new(),
    ));
    let (service, _client, repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    match &err {
        DomainError::UpstreamShape { step, raw } => {
            assert_eq!(*step, Step::Deproc);
            assert_eq!(raw.as_ref().unwrap()["data"]["status"], "ok");
        }
        other => panic!("expected UpstreamShape, got {:?}", other),
    }
    assert_eq!(err.step_label(), Some("deproc_parse"));
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn non_json_deproc_body_keeps_its_text_in_the_parse_error() {
    let client = MockEgovClient::new().with_deproc(StepResult::from_http(
        Step::Deproc,
        200,
        None,
        "<html>maintenance page</html>".to_string(),
    ));
    let (service, _client, _repo) = service(client, MockProfileRepository::new());

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    match err {
        DomainError::UpstreamShape { step, raw } => {
            assert_eq!(step, Step::Deproc);
            assert_eq!(
                raw.unwrap(),
                serde_json::Value::String("<html>maintenance page</html>".to_string())
            );
        }
        other => panic!("expected UpstreamShape, got {:?}", other),
    }
}

#[tokio::test]
async fn persistence_failure_is_fatal_and_skips_notify() {
    let (service, client, _repo) = service(
        MockEgovClient::new(),
        MockProfileRepository::new().failing_writes(),
    );

    let err = service
        .login(LoginRequest::new("A1", "M1"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Database { .. }));
    assert_eq!(err.step_label(), Some("persist"));
    assert_eq!(client.call_count(Step::Notify), 0);
}

#[tokio::test]
async fn inputs_are_trimmed_before_use() {
    let (service, _client, repo) = service(MockEgovClient::new(), MockProfileRepository::new());

    service
        .login(LoginRequest::new("  A1  ", " M1 "))
        .await
        .unwrap();

    let stored = repo.find_by_citizen_id("C9").await.unwrap().unwrap();
    assert_eq!(stored.app_id, "A1");
}
