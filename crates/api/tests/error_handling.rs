//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values and inspect the
//! rendered error page.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use billed_api::error::AppError;
use billed_core::error::CoreError;
use billed_db::StoreError;
use common::{body_text, element_text};

/// Convert an `AppError` into its status code and error-page message.
async fn error_to_response(err: AppError) -> (StatusCode, String) {
    let response = err.into_response();
    let status = response.status();
    let html = body_text(response).await;
    let message = element_text(&html, "error-message")
        .expect("error page must carry a message")
        .to_string();
    (status, message)
}

#[tokio::test]
async fn store_http_error_mirrors_status_and_message() {
    let (status, message) = error_to_response(StoreError::http(404).into()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "Erreur 404");

    let (status, message) = error_to_response(StoreError::http(500).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, "Erreur 500");
}

#[tokio::test]
async fn invalid_store_status_maps_to_bad_gateway() {
    let err = AppError::Store(StoreError::Http {
        status: 42,
        message: "Erreur réseau".into(),
    });

    let (status, message) = error_to_response(err).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(message, "Erreur réseau");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Aucun utilisateur connecté".into()));

    let (status, message) = error_to_response(err).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(message, "Aucun utilisateur connecté");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, message) =
        error_to_response(AppError::BadRequest("invalid multipart body".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(message, "invalid multipart body");
}

#[tokio::test]
async fn store_serialization_error_returns_500_and_sanitizes() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{\"id\":").unwrap_err();
    let detail = parse_err.to_string();

    let (status, message) = error_to_response(StoreError::Serialization(parse_err).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(message, "Une erreur interne est survenue");
    assert!(!message.contains(&detail));
}

#[tokio::test]
async fn error_message_is_escaped() {
    let (_, message) =
        error_to_response(AppError::BadRequest("<script>alert(1)</script>".into())).await;
    assert_eq!(message, "&lt;script&gt;alert(1)&lt;/script&gt;");
}
