use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by handlers: `{"error": title, "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        if e.is_validation() {
            return Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()));
        }
        error!(err = %e, "store call failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.title, "detail": self.detail}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn service_errors_map_to_status() {
        let v: JsonApiError = ServiceError::Validation("sede 9 not found".into()).into();
        assert_eq!(v.status, StatusCode::BAD_REQUEST);
        let m: JsonApiError = ServiceError::Model(ModelError::Validation("nombre required".into())).into();
        assert_eq!(m.status, StatusCode::BAD_REQUEST);
        let d: JsonApiError = ServiceError::Db("connection reset".into()).into();
        assert_eq!(d.status, StatusCode::INTERNAL_SERVER_ERROR);
        let md: JsonApiError = ServiceError::Model(ModelError::Db("constraint".into())).into();
        assert_eq!(md.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
