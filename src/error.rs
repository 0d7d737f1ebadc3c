use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Generic user-facing message for any persistence failure. The real cause
/// only ever reaches the operator logs.
pub const SAVE_ERROR_MESSAGE: &str = "Ha ocurrido un error al guardar tus datos.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Submission already in flight: {0}")]
    InFlight(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::InFlight(msg) => (StatusCode::CONFLICT, msg),
            Error::Database(err) => {
                tracing::error!(error = ?err, "database error during save");
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_ERROR_MESSAGE.to_string())
            }
            Error::Anyhow(err) => {
                tracing::error!(error = ?err, "submission failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SAVE_ERROR_MESSAGE.to_string())
            }
            Error::Config(msg) => {
                tracing::error!(error = %msg, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err)
    }
}
