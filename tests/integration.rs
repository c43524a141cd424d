use actix_web::{http::StatusCode, test, web, App};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use leave_desk::api::{fetch_file_handler, liveness_handler, vault_action_handler};
use leave_desk::app_state::AppState;
use leave_desk::protocol::VaultResponse;

fn test_app_state() -> web::Data<AppState> {
    web::Data::new(AppState::new_for_testing())
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .route("/", web::post().to(vault_action_handler))
                .route("/", web::get().to(liveness_handler))
                .route("/files/{id}", web::get().to(fetch_file_handler)),
        )
        .await
    };
}

macro_rules! post_body {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload($body.to_string())
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let envelope: VaultResponse = test::read_body_json(resp).await;
        (status, envelope)
    }};
}

#[actix_web::test]
async fn test_upload_and_fetch_round_trip() {
    let state = test_app_state();
    let app = init_app!(state);

    let body = format!(
        r#"{{"action":"upload_file_only","fileData":"{}","fileName":"evidence.png","mimeType":"image/png"}}"#,
        BASE64.encode(b"fake png bytes")
    );
    let (status, envelope) = post_body!(app, body);

    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "success");
    let data = envelope.data.expect("upload data");
    assert_eq!(data.mime_type, "image/png");
    assert_eq!(data.file_size, "0.01 KB");
    assert!(data.url.ends_with(&data.id));

    // the public URL is backed by GET /files/{id}
    let req = test::TestRequest::get()
        .uri(&format!("/files/{}", data.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..], b"fake png bytes");
}

#[actix_web::test]
async fn test_upload_malformed_base64_is_http_200_error_envelope() {
    let state = test_app_state();
    let app = init_app!(state);

    let body = r#"{"action":"upload_file_only","fileData":"%%%","fileName":"bad.png"}"#;
    let (status, envelope) = post_body!(app, body);

    // application error, not a transport failure
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "error");
    assert!(envelope.message.unwrap().starts_with("Upload Failed: "));
}

#[actix_web::test]
async fn test_delete_without_id() {
    let state = test_app_state();
    let app = init_app!(state);

    let (status, envelope) = post_body!(app, r#"{"action":"delete_file"}"#);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "error");
    assert_eq!(envelope.message.as_deref(), Some("No ID provided"));
}

#[actix_web::test]
async fn test_delete_unknown_id_masquerades_as_success() {
    let state = test_app_state();
    let app = init_app!(state);

    let (_, envelope) = post_body!(app, r#"{"action":"delete_file","id":"nope"}"#);
    assert_eq!(envelope.status, "success");
    assert_eq!(
        envelope.message.as_deref(),
        Some("File might already be deleted or not found")
    );
}

#[actix_web::test]
async fn test_upload_then_delete_hides_file() {
    let state = test_app_state();
    let app = init_app!(state);

    let body = format!(
        r#"{{"action":"upload_file_only","fileData":"{}","fileName":"a.txt","mimeType":"text/plain"}}"#,
        BASE64.encode(b"hello")
    );
    let (_, envelope) = post_body!(app, body);
    let id = envelope.data.unwrap().id;

    let (_, deleted) = post_body!(app, &format!(r#"{{"action":"delete_file","id":"{}"}}"#, id));
    assert_eq!(deleted.status, "success");

    let req = test::TestRequest::get()
        .uri(&format!("/files/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_unknown_action() {
    let state = test_app_state();
    let app = init_app!(state);

    let (status, envelope) = post_body!(app, r#"{"action":"format_disk"}"#);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "error");
    assert_eq!(envelope.message.as_deref(), Some("Invalid action"));
}

#[actix_web::test]
async fn test_json_body_without_action_is_invalid_action() {
    let state = test_app_state();
    let app = init_app!(state);

    let (status, envelope) = post_body!(app, r#"{"fileName":"a.txt","fileData":"aGk="}"#);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "error");
    assert_eq!(envelope.message.as_deref(), Some("Invalid action"));
}

#[actix_web::test]
async fn test_unparseable_body_is_structured_error() {
    let state = test_app_state();
    let app = init_app!(state);

    let (status, envelope) = post_body!(app, "this is not json");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(envelope.status, "error");
    assert!(envelope.message.unwrap().starts_with("GAS Error: "));
}

#[actix_web::test]
async fn test_liveness_probe() {
    let state = test_app_state();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let envelope: VaultResponse = test::read_body_json(resp).await;
    assert_eq!(envelope.status, "success");
    assert_eq!(
        envelope.message.as_deref(),
        Some("LeaveDesk Vault is Running")
    );
}
