use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::{DispatchError, OutboundEmail};

/// The mail-transport seam. One call, one dispatch attempt; success means
/// the transport accepted the message, not end-to-end delivery.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutboundEmail) -> Result<(), DispatchError>;
}

/// SMTP connection settings for [`SmtpMailer`].
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// Sends over SMTP via lettre. With credentials it uses a STARTTLS relay;
/// without, a direct unauthenticated connection (local dev, e.g. MailDev).
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> anyhow::Result<Self> {
        let transport = if settings.username.is_empty() || settings.password.is_empty() {
            info!(
                smtp_host = %settings.host,
                smtp_port = settings.port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&settings.host)
                .port(settings.port)
                .build()
        } else {
            let creds = Credentials::new(settings.username.clone(), settings.password.clone());
            SmtpTransport::relay(&settings.host)?
                .port(settings.port)
                .credentials(creds)
                .build()
        };

        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &OutboundEmail) -> Result<(), DispatchError> {
        let message = Message::builder()
            .from(email.from.parse()?)
            .reply_to(email.reply_to.parse()?)
            .to(email.to.parse()?)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())?;

        self.transport.send(&message)?;

        Ok(())
    }
}
