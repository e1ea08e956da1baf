use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use portfolio_contact::{ContactSubmission, SubmitFormInput};

use crate::{error::AppError, routes::AppState};

/// Absent fields deserialize to empty strings so "empty or absent" produce
/// the same missing-field rejection.
#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Result<impl IntoResponse, AppError> {
    let submission = ContactSubmission::parse(SubmitFormInput {
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
    })?;

    let email = submission.compose(
        &app_state.config.email.contact_address,
        &app_state.config.email.from_address,
    );

    app_state.mailer.send(&email)?;

    tracing::info!(reply_to = %submission.email(), "Contact form submission dispatched");

    Ok("Your message has been sent successfully!")
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method.")
}
