use thiserror::Error;

/// Validation failures for a contact submission. Display strings double as
/// the response bodies the form endpoint returns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill out all required fields.")]
    MissingField,

    #[error("Invalid email format.")]
    InvalidEmail,
}

/// Failure handing a composed email to the mail transport. Detail stays
/// server-side; callers report a generic message.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("invalid mailbox address: {0}")]
    Mailbox(#[from] lettre::address::AddressError),

    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("mail transport failure: {0}")]
    Failed(String),
}
