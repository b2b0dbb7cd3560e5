use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mindgrow_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// A failed API operation.
///
/// Every variant renders as `500` with the operation's generic message; the
/// underlying cause is logged and never sent to the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}: {source}")]
    Core {
        message: &'static str,
        #[source]
        source: CoreError,
    },
    #[error("{message}: {source}")]
    InvalidBody {
        message: &'static str,
        #[source]
        source: JsonRejection,
    },
}

impl ApiError {
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Core { message, .. } | ApiError::InvalidBody { message, .. } => message,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.public_message().to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Attaches an operation's public failure message to a fallible result.
pub trait OrFail<T> {
    fn or_fail(self, message: &'static str) -> ApiResult<T>;
}

impl<T> OrFail<T> for Result<T, CoreError> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::Core { message, source })
    }
}

impl<T> OrFail<T> for Result<T, JsonRejection> {
    fn or_fail(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|source| ApiError::InvalidBody { message, source })
    }
}
