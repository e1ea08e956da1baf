use std::sync::Arc;

use axum::{Router, routing::get, routing::post};
use portfolio_contact::Mailer;
use tower_http::trace::TraceLayer;

mod assets;
mod contact;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub mailer: Arc<dyn Mailer>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/contact",
            post(contact::action).fallback(contact::method_not_allowed),
        )
        .fallback(assets::page)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
