use std::sync::{Arc, Mutex};

use axum::Router;
use portfolio::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use portfolio::routes::{AppState, router};
use portfolio_contact::{DispatchError, Mailer, OutboundEmail};

/// Records every dispatched email instead of talking to SMTP.
#[derive(Default, Clone)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

impl Mailer for RecordingMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), DispatchError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Fails every dispatch, counting attempts.
#[derive(Default, Clone)]
pub struct FailingMailer {
    pub attempts: Arc<Mutex<u32>>,
}

impl Mailer for FailingMailer {
    fn send(&self, _email: &OutboundEmail) -> Result<(), DispatchError> {
        *self.attempts.lock().unwrap() += 1;
        Err(DispatchError::Failed("smtp connection refused".to_string()))
    }
}

pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub sent: Arc<Mutex<Vec<OutboundEmail>>>,
}

pub fn create_test_app() -> TestApp {
    let mailer = RecordingMailer::default();
    let sent = mailer.sent.clone();

    let state = AppState {
        config: create_test_config(),
        mailer: Arc::new(mailer),
    };

    TestApp {
        router: router(state),
        sent,
    }
}

pub fn create_failing_app() -> (Router, Arc<Mutex<u32>>) {
    let mailer = FailingMailer::default();
    let attempts = mailer.attempts.clone();

    let state = AppState {
        config: create_test_config(),
        mailer: Arc::new(mailer),
    };

    (router(state), attempts)
}
