use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Handler failure. Callers only ever see a bare status; the cause goes to the log.
pub struct ResponseError(Response);

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl<E> From<E> for ResponseError
where
    E: Into<color_eyre::eyre::Error>,
{
    fn from(value: E) -> Self {
        let report = Into::<color_eyre::eyre::Error>::into(value);
        error!("{report:#}");
        Self::status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ResponseError {
    pub fn status(status_code: StatusCode) -> Self {
        ResponseError(status_code.into_response())
    }

    pub fn bad_request(reason: impl std::fmt::Display) -> Self {
        warn!("Rejected request: {reason}");
        Self::status(StatusCode::BAD_REQUEST)
    }
}

pub type Result<T, E = ResponseError> = axum::response::Result<T, E>;
