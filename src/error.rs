use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ContactError, DispatchError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ContactError),

    #[error("There was a problem sending the email. Please try again later.")]
    Dispatch(#[from] DispatchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            AppError::Dispatch(err) => {
                // Transport detail goes to logs, never to the caller
                tracing::error!(error = %err, "Failed to dispatch contact email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "There was a problem sending the email. Please try again later.",
                )
                    .into_response()
            }
        }
    }
}
