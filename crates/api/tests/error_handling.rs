//! Tests for the JSON error envelope produced by `AppError`.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::Value;
use tupermiso_api::error::{upstream_message, AppError};
use tupermiso_core::error::CoreError;
use tupermiso_registry::RegistryError;

async fn render(error: AppError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_keeps_its_message() {
    let (status, json) = render(AppError::not_found("SOAP no encontrado")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "SOAP no encontrado");
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn validation_is_a_400() {
    let (status, json) =
        render(AppError::Core(CoreError::Validation("Debe ingresar un PPU.".into()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Debe ingresar un PPU.");
}

#[tokio::test]
async fn unauthorized_and_forbidden() {
    let (status, _) =
        render(AppError::Core(CoreError::Unauthorized("Credenciales inválidas".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, json) =
        render(AppError::Core(CoreError::Forbidden("Se requiere rol de administrador".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let (status, json) = render(AppError::InternalError("secret detail".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_is_a_404() {
    let (status, json) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Resource not found");
}

#[tokio::test]
async fn downstream_404_stays_404_with_custom_message() {
    let err = RegistryError::Status {
        status: 404,
        body: r#"{"error":"Padrón no encontrado","code":"NOT_FOUND"}"#.into(),
    };
    let (status, json) = render(AppError::from_registry(err, "Patente no encontrada")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Patente no encontrada");
}

#[tokio::test]
async fn downstream_500_is_sanitized() {
    let err = RegistryError::Status {
        status: 502,
        body: "bad gateway".into(),
    };
    let (status, json) = render(AppError::from_registry(err, "unused")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn relay_keeps_downstream_status_and_message() {
    let err = RegistryError::Status {
        status: 400,
        body: r#"{"error":"El PPU ya está registrado","code":"BAD_REQUEST"}"#.into(),
    };
    let (status, json) = render(AppError::relay(err)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "El PPU ya está registrado");
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}

#[test]
fn relay_only_wraps_status_replies() {
    let relayed = AppError::relay(RegistryError::Status {
        status: 404,
        body: r#"{"detail":"Not Found"}"#.into(),
    });
    assert_matches!(relayed, AppError::Upstream { ref status, ref message }
        if *status == StatusCode::NOT_FOUND && message == "Not Found");

    let relayed = AppError::relay(RegistryError::MissingApiKey);
    assert_matches!(relayed, AppError::Registry(RegistryError::MissingApiKey));
}

#[test]
fn upstream_message_understands_detail_and_plain_text() {
    assert_eq!(upstream_message(r#"{"detail":"Not Found"}"#), "Not Found");
    assert_eq!(upstream_message("plain failure"), "plain failure");
}
