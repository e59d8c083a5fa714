use axum::{Json, http::StatusCode, response::IntoResponse};
use snowfolio_store::StoreError;
use snowfolio_zapper::error::ProtocolError;
use thiserror::Error;

use crate::dto::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    /// The upstream provider rejected the request; its status is passed
    /// through to the caller.
    #[error("{message}")]
    UpstreamRejected { status: u16, message: String },
    #[error("{0}")]
    BadGateway(String),
    #[error("Internal server error")]
    InternalServerError,
}

impl From<ProtocolError> for ApiError {
    fn from(err: ProtocolError) -> Self {
        match err {
            ProtocolError::NotFound(message) => Self::NotFound(message),
            ProtocolError::Upstream { status, message } => {
                Self::UpstreamRejected { status, message }
            }
            ProtocolError::Transport(e) => {
                tracing::error!(error = %e, "🔴 upstream transport failure");
                Self::BadGateway("Balance provider unreachable".to_string())
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "🗃️ history store failure");
        Self::InternalServerError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::UpstreamRejected { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                message,
            ),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };
        (status, Json(ErrorResponse { error: msg })).into_response()
    }
}
