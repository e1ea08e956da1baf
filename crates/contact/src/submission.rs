use ammonia::clean_text;
use validator::ValidateEmail;

use crate::ContactError;

pub const DEFAULT_SUBJECT: &str = "New Message";
const SUBJECT_PREFIX: &str = "Website Contact Form: ";

/// Raw form fields as received from the request body. Absent fields arrive
/// as empty strings.
#[derive(Debug, Default, Clone)]
pub struct SubmitFormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact submission. All fields are HTML-entity escaped at
/// construction; nothing downstream sees raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    /// Escape and validate raw form input. `subject` may be empty; `name`,
    /// `email`, and `message` may not, and `email` must look like an email
    /// address. Escaping happens before the emptiness check so the two
    /// agree on what "empty" means.
    pub fn parse(input: SubmitFormInput) -> Result<Self, ContactError> {
        let name = clean_text(&input.name);
        let email = clean_text(&input.email);
        let subject = clean_text(&input.subject);
        let message = clean_text(&input.message);

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingField);
        }

        if !email.validate_email() {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Build the outbound notification email. `to` is the configured
    /// recipient, `from` the configured no-reply sender; the submitter's
    /// address goes into `Reply-To` so the recipient can answer directly.
    pub fn compose(&self, to: &str, from: &str) -> OutboundEmail {
        let subject = if self.subject.is_empty() {
            format!("{SUBJECT_PREFIX}{DEFAULT_SUBJECT}")
        } else {
            format!("{SUBJECT_PREFIX}{}", self.subject)
        };

        let body = format!(
            "You have received a new message from your website contact form.\n\n\
             Name: {}\n\
             Email: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n",
            self.name, self.email, self.subject, self.message
        );

        OutboundEmail {
            to: to.to_string(),
            from: from.to_string(),
            reply_to: self.email.clone(),
            subject,
            body,
        }
    }
}

/// A composed plain-text email, ready for a [`crate::Mailer`]. Sent as
/// `text/plain; charset=UTF-8`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}
