//! Contact form domain: submission validation, email composition, and the
//! mail-transport seam.

mod error;
mod mailer;
mod submission;

pub use error::{ContactError, DispatchError};
pub use mailer::{Mailer, SmtpMailer, SmtpSettings};
pub use submission::{ContactSubmission, OutboundEmail, SubmitFormInput};
