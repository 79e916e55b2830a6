//! JSON fixture endpoints. Fixtures are re-read from disk on every request.

use std::path::{Path, PathBuf};

use axum::extract::{FromRequest, Path as UrlPath, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::state::AppState;
use crate::error::MockError;

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        warn!("Mock lookup failed: {}", self);
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Mock file not found" })),
        )
            .into_response()
    }
}

/// Rejects anything that could escape the fixture root.
pub fn validate_segment(segment: &str) -> Result<&str, MockError> {
    let bad = segment.is_empty()
        || segment == "."
        || segment.contains("..")
        || segment.contains('/')
        || segment.contains('\\')
        || segment.contains('\0');
    if bad {
        return Err(MockError::InvalidPath(segment.to_string()));
    }
    Ok(segment)
}

pub async fn read_fixture(path: &Path) -> Result<Value, MockError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(MockError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(MockError::Io(e)),
    };
    Ok(serde_json::from_str(&raw)?)
}

/// `<root>/<folder>/<file>.json`, both segments validated.
pub async fn load_fixture(root: &Path, folder: &str, file: &str) -> Result<Value, MockError> {
    let folder = validate_segment(folder)?;
    let file = validate_segment(file)?;
    let path: PathBuf = root.join(folder).join(format!("{file}.json"));
    read_fixture(&path).await
}

pub async fn root() -> &'static str {
    "Mock Server is running"
}

pub async fn login_success(State(state): State<AppState>) -> Result<Json<Value>, MockError> {
    load_fixture(&state.config.mocks_dir, "login", "loginSuccess").await.map(Json)
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Accepts JSON or urlencoded bodies; an unreadable body counts as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Value>, MockError> {
    let body = if is_form(request.headers()) {
        Form::<LoginRequest>::from_request(request, &())
            .await
            .map(|Form(body)| body)
            .unwrap_or_default()
    } else {
        Json::<LoginRequest>::from_request(request, &())
            .await
            .map(|Json(body)| body)
            .unwrap_or_default()
    };

    let fixture = if body.password.as_deref() == Some(state.config.master_password.as_str()) {
        "loginSuccess"
    } else {
        "loginError"
    };
    load_fixture(&state.config.mocks_dir, "login", fixture).await.map(Json)
}

pub async fn logout(State(state): State<AppState>) -> Result<(StatusCode, Json<Value>), MockError> {
    let body = load_fixture(&state.config.mocks_dir, "logout", "success").await?;
    Ok((StatusCode::UNAUTHORIZED, Json(body)))
}

pub async fn runtime_metrics(
    State(state): State<AppState>,
    UrlPath(tag_id): UrlPath<String>,
) -> Result<Json<Value>, MockError> {
    info!("RuntimeMetrics for Class {}", tag_id);
    read_fixture(&state.config.mocks_dir.join("runtimeMetrics.json"))
        .await
        .map(Json)
}

pub async fn chat_history(State(state): State<AppState>) -> Result<Json<Value>, MockError> {
    load_fixture(&state.config.mocks_dir, "chatHistoryMock", "chat_history")
        .await
        .map(Json)
}

/// GET /mocks/users/get -> mocks/users/get.json
pub async fn mock_file(
    State(state): State<AppState>,
    UrlPath((folder, file)): UrlPath<(String, String)>,
) -> Result<Json<Value>, MockError> {
    load_fixture(&state.config.mocks_dir, &folder, &file).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_validation() {
        assert!(validate_segment("users").is_ok());
        assert!(validate_segment("get.v2").is_ok());
        for bad in ["", ".", "..", "../etc", "a/b", "a\\b"] {
            assert!(validate_segment(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[tokio::test]
    async fn loads_and_rejects_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("users")).unwrap();
        std::fs::write(dir.path().join("users/get.json"), r#"{"id": 7}"#).unwrap();
        std::fs::write(dir.path().join("users/broken.json"), "{not json").unwrap();

        let value = load_fixture(dir.path(), "users", "get").await.unwrap();
        assert_eq!(value["id"], 7);

        assert!(matches!(
            load_fixture(dir.path(), "users", "missing").await,
            Err(MockError::NotFound(_))
        ));
        assert!(matches!(
            load_fixture(dir.path(), "users", "broken").await,
            Err(MockError::Parse(_))
        ));
        assert!(matches!(
            load_fixture(dir.path(), "..", "get").await,
            Err(MockError::InvalidPath(_))
        ));
    }
}
